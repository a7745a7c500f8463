//! Wishlist and recently viewed product lists.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    store::{StoreKey, UserStore},
};

pub const RECENTLY_VIEWED_LIMIT: usize = 12;

pub async fn wishlist(store: &UserStore) -> AppResult<Vec<Uuid>> {
    store.get(StoreKey::Wishlist, Vec::new()).await
}

/// Adding a product that is already saved changes nothing.
pub async fn add_to_wishlist(store: &UserStore, product_id: Uuid) -> AppResult<()> {
    store.require_user()?;
    let mut ids = wishlist(store).await?;
    if ids.contains(&product_id) {
        return Ok(());
    }
    ids.push(product_id);
    store.set(StoreKey::Wishlist, &ids).await
}

pub async fn remove_from_wishlist(store: &UserStore, product_id: Uuid) -> AppResult<()> {
    store.require_user()?;
    let mut ids = wishlist(store).await?;
    let before = ids.len();
    ids.retain(|id| *id != product_id);
    if ids.len() == before {
        return Err(AppError::NotFound);
    }
    store.set(StoreKey::Wishlist, &ids).await
}

/// Most recent first.
pub async fn recently_viewed(store: &UserStore) -> AppResult<Vec<Uuid>> {
    store.get(StoreKey::RecentlyViewed, Vec::new()).await
}

pub async fn record_view(store: &UserStore, product_id: Uuid) -> AppResult<()> {
    store.require_user()?;
    let mut ids = recently_viewed(store).await?;
    ids.retain(|id| *id != product_id);
    ids.insert(0, product_id);
    ids.truncate(RECENTLY_VIEWED_LIMIT);
    store.set(StoreKey::RecentlyViewed, &ids).await
}
