use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Notification, RelatedType},
    store::{StoreKey, UserStore},
};

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub related_type: RelatedType,
    pub related_id: Uuid,
}

/// Newest first.
pub async fn list(store: &UserStore) -> AppResult<Vec<Notification>> {
    store.get(StoreKey::Notifications, Vec::new()).await
}

pub async fn push(store: &UserStore, new: NewNotification) -> AppResult<Notification> {
    let user_id = store.require_user()?;
    let mut all = list(store).await?;
    let notification = Notification {
        id: Uuid::new_v4(),
        user_id,
        title: new.title,
        message: new.message,
        related_type: new.related_type,
        related_id: new.related_id,
        is_read: false,
        created_at: Utc::now(),
    };
    all.insert(0, notification.clone());
    store.set(StoreKey::Notifications, &all).await?;
    Ok(notification)
}

/// Push without failing the caller; a lost notification is only logged.
pub async fn notify(store: &UserStore, new: NewNotification) {
    if let Err(err) = push(store, new).await {
        tracing::warn!(error = %err, user_id = ?store.user_id(), "notification failed");
    }
}

pub async fn unread_count(store: &UserStore) -> AppResult<usize> {
    Ok(list(store).await?.iter().filter(|n| !n.is_read).count())
}

pub async fn mark_read(store: &UserStore, id: Uuid) -> AppResult<()> {
    store.require_user()?;
    let mut all = list(store).await?;
    let notification = all
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(AppError::NotFound)?;
    notification.is_read = true;
    store.set(StoreKey::Notifications, &all).await
}

pub async fn mark_all_read(store: &UserStore) -> AppResult<()> {
    store.require_user()?;
    let mut all = list(store).await?;
    for notification in all.iter_mut() {
        notification.is_read = true;
    }
    store.set(StoreKey::Notifications, &all).await
}
