use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod content;
pub mod custom_requests;
pub mod doc;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod params;
pub mod products;
pub mod wishlist;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/me", auth::profile_router())
        .nest("/products", products::router())
        .nest("/collections", products::collections_router())
        .merge(content::router())
        .nest("/cart", cart::router())
        .nest("/checkout", orders::checkout_router())
        .nest("/orders", orders::router())
        .nest("/custom-requests", custom_requests::router())
        .nest("/wishlist", wishlist::router())
        .nest("/recently-viewed", wishlist::recently_viewed_router())
        .nest("/notifications", notifications::router())
        .nest("/admin", admin::router())
}
