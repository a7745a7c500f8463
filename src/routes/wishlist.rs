use axum::{
    Router,
    extract::State,
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::content::ProductRef,
    error::AppResult,
    extract::{Json, Path},
    middleware::auth::AuthUser,
    models::Product,
    response::{Ack, ApiResponse},
    services::{recently_viewed_service, wishlist_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist).post(add_to_wishlist))
        .route("/{product_id}", delete(remove_from_wishlist))
}

pub fn recently_viewed_router() -> Router<AppState> {
    Router::new().route("/", get(list_recently_viewed).post(record_view))
}

#[utoipa::path(
    get,
    path = "/api/wishlist",
    responses(
        (status = 200, description = "Wishlisted products", body = ApiResponse<Vec<Product>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let resp = wishlist_service::list(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/wishlist",
    request_body = ProductRef,
    responses(
        (status = 200, description = "Product wishlisted", body = ApiResponse<Ack>),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ProductRef>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = wishlist_service::add(&state, &user, payload.product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{product_id}",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed", body = ApiResponse<Ack>),
        (status = 404, description = "Product not in wishlist")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = wishlist_service::remove(&state, &user, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/recently-viewed",
    responses(
        (status = 200, description = "Recently viewed products, most recent first", body = ApiResponse<Vec<Product>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn list_recently_viewed(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let resp = recently_viewed_service::list(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/recently-viewed",
    request_body = ProductRef,
    responses(
        (status = 200, description = "View recorded", body = ApiResponse<Ack>)
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn record_view(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ProductRef>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = recently_viewed_service::record(&state, &user, payload.product_id).await?;
    Ok(Json(resp))
}
