mod common;

use serde_json::json;
use uuid::Uuid;

use common::memory;
use merch_storefront_api::store::{Storage, StoreKey, UserStore, scan_lists};

#[tokio::test]
async fn documents_are_scoped_per_user_and_key() {
    let storage = memory();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    storage.set(alice, StoreKey::Wishlist, json!(["a"])).await.unwrap();
    storage.set(bob, StoreKey::Wishlist, json!(["b"])).await.unwrap();
    storage.set(alice, StoreKey::Cart, json!([])).await.unwrap();

    assert_eq!(
        storage.get(alice, StoreKey::Wishlist).await.unwrap(),
        Some(json!(["a"]))
    );
    assert!(storage.get(bob, StoreKey::Cart).await.unwrap().is_none());

    let mut wishlists = storage.scan(StoreKey::Wishlist).await.unwrap();
    wishlists.sort_by_key(|(scope, _)| *scope == bob);
    assert_eq!(wishlists.len(), 2);
    assert_eq!(wishlists[0], (alice, json!(["a"])));

    storage.delete(alice, StoreKey::Wishlist).await.unwrap();
    assert!(storage.get(alice, StoreKey::Wishlist).await.unwrap().is_none());
}

#[tokio::test]
async fn last_write_wins() {
    let storage = memory();
    let store = UserStore::new(storage, Some(Uuid::new_v4()));

    store.set(StoreKey::RecentlyViewed, &vec![1, 2]).await.unwrap();
    store.set(StoreKey::RecentlyViewed, &vec![3]).await.unwrap();

    let stored: Vec<i32> = store.get(StoreKey::RecentlyViewed, Vec::new()).await.unwrap();
    assert_eq!(stored, vec![3]);
}

#[tokio::test]
async fn signed_out_store_reads_defaults_and_ignores_writes() {
    let storage = memory();
    let store = UserStore::anonymous(storage.clone());

    store.set(StoreKey::Cart, &vec!["ignored"]).await.unwrap();
    let cart: Vec<String> = store.get(StoreKey::Cart, Vec::new()).await.unwrap();
    assert!(cart.is_empty());
    assert!(storage.scan(StoreKey::Cart).await.unwrap().is_empty());
    assert!(store.require_user().is_err());
}

#[tokio::test]
async fn scan_lists_decodes_every_user() {
    let storage = memory();
    let alice = UserStore::new(storage.clone(), Some(Uuid::new_v4()));
    let bob = alice.for_user(Uuid::new_v4());

    alice.set(StoreKey::Orders, &vec![1, 2]).await.unwrap();
    bob.set(StoreKey::Orders, &vec![3]).await.unwrap();

    let lists = scan_lists::<i32>(storage.as_ref(), StoreKey::Orders).await.unwrap();
    let total: usize = lists.iter().map(|(_, list)| list.len()).sum();
    assert_eq!(lists.len(), 2);
    assert_eq!(total, 3);
}

#[tokio::test]
async fn malformed_document_surfaces_as_an_error() {
    let storage = memory();
    let user = Uuid::new_v4();
    storage.set(user, StoreKey::Orders, json!({"not": "a list"})).await.unwrap();

    let store = UserStore::new(storage, Some(user));
    let result: Result<Vec<i32>, _> = store.get(StoreKey::Orders, Vec::new()).await;
    assert!(result.is_err());
}
