use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Storage, StoreKey};
use crate::error::AppResult;

#[derive(Default)]
pub struct MemoryStorage {
    docs: RwLock<HashMap<(Uuid, StoreKey), Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, scope: Uuid, key: StoreKey) -> AppResult<Option<Value>> {
        Ok(self.docs.read().await.get(&(scope, key)).cloned())
    }

    async fn set(&self, scope: Uuid, key: StoreKey, value: Value) -> AppResult<()> {
        self.docs.write().await.insert((scope, key), value);
        Ok(())
    }

    async fn delete(&self, scope: Uuid, key: StoreKey) -> AppResult<()> {
        self.docs.write().await.remove(&(scope, key));
        Ok(())
    }

    async fn scan(&self, key: StoreKey) -> AppResult<Vec<(Uuid, Value)>> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|((_, k), _)| *k == key)
            .map(|((scope, _), value)| (*scope, value.clone()))
            .collect())
    }
}
