//! Per-user document storage.
//!
//! Cart lines, orders, custom requests and the other per-customer lists are
//! kept as one JSON document per (user, key) pair. The mechanism sits behind
//! [`Storage`] so the in-memory map used by tests and the database table used
//! in production are interchangeable.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

mod db;
mod memory;

pub use db::DbStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Cart,
    Orders,
    Requests,
    Notifications,
    Wishlist,
    RecentlyViewed,
    CustomerNotes,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Cart => "cart",
            StoreKey::Orders => "orders",
            StoreKey::Requests => "requests",
            StoreKey::Notifications => "notifications",
            StoreKey::Wishlist => "wishlist",
            StoreKey::RecentlyViewed => "recently_viewed",
            StoreKey::CustomerNotes => "customer_notes",
        }
    }
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, scope: Uuid, key: StoreKey) -> AppResult<Option<Value>>;

    /// Overwrite the document; last write wins.
    async fn set(&self, scope: Uuid, key: StoreKey, value: Value) -> AppResult<()>;

    async fn delete(&self, scope: Uuid, key: StoreKey) -> AppResult<()>;

    /// Every scope's document for `key`.
    async fn scan(&self, key: StoreKey) -> AppResult<Vec<(Uuid, Value)>>;
}

/// Typed view of a [`Storage`] scoped to the current user, if any.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn Storage>,
    user_id: Option<Uuid>,
}

impl UserStore {
    pub fn new(storage: Arc<dyn Storage>, user_id: Option<Uuid>) -> Self {
        Self { storage, user_id }
    }

    pub fn anonymous(storage: Arc<dyn Storage>) -> Self {
        Self::new(storage, None)
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub fn require_user(&self) -> AppResult<Uuid> {
        self.user_id.ok_or(AppError::Unauthorized)
    }

    /// Stored value, or `default` when signed out or nothing was stored yet.
    pub async fn get<T: DeserializeOwned>(&self, key: StoreKey, default: T) -> AppResult<T> {
        let Some(user_id) = self.user_id else {
            return Ok(default);
        };
        match self.storage.get(user_id, key).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(default),
        }
    }

    /// No-op when signed out.
    pub async fn set<T: Serialize>(&self, key: StoreKey, value: &T) -> AppResult<()> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };
        self.storage
            .set(user_id, key, serde_json::to_value(value)?)
            .await
    }

    pub async fn delete(&self, key: StoreKey) -> AppResult<()> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };
        self.storage.delete(user_id, key).await
    }

    /// The same storage seen as another user; used when an admin action
    /// writes into a customer's documents.
    pub fn for_user(&self, user_id: Uuid) -> UserStore {
        UserStore::new(self.storage.clone(), Some(user_id))
    }
}

/// Decode every user's list stored under `key`.
pub async fn scan_lists<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: StoreKey,
) -> AppResult<Vec<(Uuid, Vec<T>)>> {
    let docs = storage.scan(key).await?;
    let mut lists = Vec::with_capacity(docs.len());
    for (user_id, value) in docs {
        lists.push((user_id, serde_json::from_value(value)?));
    }
    Ok(lists)
}
