pub mod admin_order_service;
pub mod admin_product_service;
pub mod admin_request_service;
pub mod admin_user_service;
pub mod auth_service;
pub mod cart_service;
pub mod collection_service;
pub mod content_service;
pub mod custom_request_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod log_service;
pub mod marketing_service;
pub mod notification_service;
pub mod order_service;
pub mod product_service;
pub mod recently_viewed_service;
pub mod settings_service;
pub mod wishlist_service;

use crate::{audit::log_admin_action, middleware::auth::AdminPrincipal, state::AppState};

/// Best-effort activity log entry for an admin mutation.
pub(crate) async fn record_admin_action(
    state: &AppState,
    admin: &AdminPrincipal,
    action: &str,
    details: impl Into<String>,
) {
    if let Err(err) =
        log_admin_action(&state.orm, Some(admin.admin_id), &admin.name, action, details).await
    {
        tracing::warn!(error = %err, action, "audit log failed");
    }
}
