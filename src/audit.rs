use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::{entity::admin_logs::ActiveModel as AdminLogActive, error::AppResult};

/// Append one entry to the back-office activity log.
pub async fn log_admin_action(
    orm: &DatabaseConnection,
    admin_id: Option<Uuid>,
    admin_name: &str,
    action: &str,
    details: impl Into<String>,
) -> AppResult<()> {
    AdminLogActive {
        id: Set(Uuid::new_v4()),
        admin_id: Set(admin_id),
        admin_name: Set(admin_name.to_string()),
        action: Set(action.to_string()),
        details: Set(details.into()),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;

    Ok(())
}
