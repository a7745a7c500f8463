mod common;

use uuid::Uuid;

use common::{customer_store, memory};
use merch_storefront_api::{
    error::AppError,
    lifecycle::{
        browsing::{self, RECENTLY_VIEWED_LIMIT},
        notifications::{self, NewNotification},
    },
    models::RelatedType,
    store::UserStore,
};

#[tokio::test]
async fn wishlist_ignores_duplicates() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = Uuid::new_v4();

    browsing::add_to_wishlist(&store, product).await.unwrap();
    browsing::add_to_wishlist(&store, product).await.unwrap();

    assert_eq!(browsing::wishlist(&store).await.unwrap(), vec![product]);
}

#[tokio::test]
async fn removing_an_unsaved_product_is_not_found() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let saved = Uuid::new_v4();
    browsing::add_to_wishlist(&store, saved).await.unwrap();

    let err = browsing::remove_from_wishlist(&store, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    browsing::remove_from_wishlist(&store, saved).await.unwrap();
    assert!(browsing::wishlist(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn recently_viewed_moves_repeats_to_front_and_caps() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let ids: Vec<Uuid> = (0..RECENTLY_VIEWED_LIMIT + 3).map(|_| Uuid::new_v4()).collect();

    for id in &ids {
        browsing::record_view(&store, *id).await.unwrap();
    }
    browsing::record_view(&store, ids[RECENTLY_VIEWED_LIMIT]).await.unwrap();

    let viewed = browsing::recently_viewed(&store).await.unwrap();
    assert_eq!(viewed.len(), RECENTLY_VIEWED_LIMIT);
    assert_eq!(viewed[0], ids[RECENTLY_VIEWED_LIMIT]);
    assert_eq!(viewed[1], *ids.last().unwrap());
    assert!(!viewed.contains(&ids[0]));
}

#[tokio::test]
async fn signed_out_visitors_have_empty_lists() {
    let store = UserStore::anonymous(memory());

    assert!(browsing::wishlist(&store).await.unwrap().is_empty());
    assert!(browsing::recently_viewed(&store).await.unwrap().is_empty());
    assert!(matches!(
        browsing::add_to_wishlist(&store, Uuid::new_v4()).await,
        Err(AppError::Unauthorized)
    ));
}

fn order_update(n: u8) -> NewNotification {
    NewNotification {
        title: format!("Update {n}"),
        message: "Your order moved".into(),
        related_type: RelatedType::Order,
        related_id: Uuid::new_v4(),
    }
}

#[tokio::test]
async fn notifications_are_newest_first_and_can_be_read() {
    let storage = memory();
    let (user_id, store) = customer_store(&storage);

    let first = notifications::push(&store, order_update(1)).await.unwrap();
    notifications::push(&store, order_update(2)).await.unwrap();
    notifications::push(&store, order_update(3)).await.unwrap();

    let all = notifications::list(&store).await.unwrap();
    assert_eq!(all[0].title, "Update 3");
    assert!(all.iter().all(|n| n.user_id == user_id));
    assert_eq!(notifications::unread_count(&store).await.unwrap(), 3);

    notifications::mark_read(&store, first.id).await.unwrap();
    assert_eq!(notifications::unread_count(&store).await.unwrap(), 2);

    notifications::mark_all_read(&store).await.unwrap();
    assert_eq!(notifications::unread_count(&store).await.unwrap(), 0);

    let err = notifications::mark_read(&store, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
