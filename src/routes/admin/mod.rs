use axum::Router;

use crate::state::AppState;

pub mod admin_users;
pub mod auth;
pub mod collections;
pub mod custom_requests;
pub mod customers;
pub mod dashboard;
pub mod logs;
pub mod marketing;
pub mod orders;
pub mod products;
pub mod settings;

/// Back-office routes; each handler checks the caller's area itself.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/custom-requests", custom_requests::router())
        .nest("/collections", collections::router())
        .merge(marketing::router())
        .nest("/customers", customers::router())
        .nest("/settings", settings::router())
        .nest("/admin-users", admin_users::router())
        .nest("/logs", logs::router())
}
