use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, sea_query::OnConflict,
};
use serde_json::Value;
use uuid::Uuid;

use super::{Storage, StoreKey};
use crate::{
    entity::user_documents::{ActiveModel, Column, Entity as UserDocuments},
    error::AppResult,
};

/// Documents persisted in the `user_documents` table.
#[derive(Clone)]
pub struct DbStorage {
    conn: DatabaseConnection,
}

impl DbStorage {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Storage for DbStorage {
    async fn get(&self, scope: Uuid, key: StoreKey) -> AppResult<Option<Value>> {
        let doc = UserDocuments::find_by_id((scope, key.as_str().to_string()))
            .one(&self.conn)
            .await?;
        Ok(doc.map(|d| d.value))
    }

    async fn set(&self, scope: Uuid, key: StoreKey, value: Value) -> AppResult<()> {
        let active = ActiveModel {
            user_id: Set(scope),
            key: Set(key.as_str().to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().into()),
        };
        UserDocuments::insert(active)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::Key])
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, scope: Uuid, key: StoreKey) -> AppResult<()> {
        UserDocuments::delete_many()
            .filter(Column::UserId.eq(scope))
            .filter(Column::Key.eq(key.as_str()))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    async fn scan(&self, key: StoreKey) -> AppResult<Vec<(Uuid, Value)>> {
        let docs = UserDocuments::find()
            .filter(Column::Key.eq(key.as_str()))
            .all(&self.conn)
            .await?;
        Ok(docs.into_iter().map(|d| (d.user_id, d.value)).collect())
    }
}
