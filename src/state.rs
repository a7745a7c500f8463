use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    status::TransitionPolicy,
    store::{Storage, UserStore},
};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub store: Arc<dyn Storage>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, store: Arc<dyn Storage>, config: AppConfig) -> Self {
        Self {
            orm,
            store,
            config: Arc::new(config),
        }
    }

    /// Document store scoped to one user.
    pub fn user_store(&self, user_id: uuid::Uuid) -> UserStore {
        UserStore::new(self.store.clone(), Some(user_id))
    }

    pub fn transition_policy(&self) -> TransitionPolicy {
        if self.config.strict_status_transitions {
            TransitionPolicy::Enforce
        } else {
            TransitionPolicy::Permissive
        }
    }
}
