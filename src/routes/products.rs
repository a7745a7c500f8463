use axum::{
    Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    extract::{Json, Path, Query},
    models::{Collection, Product},
    response::ApiResponse,
    routes::params::{CollectionQuery, ProductQuery},
    services::{collection_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/best-sellers", get(best_sellers))
        .route("/{id}", get(get_product))
        .route("/{id}/related", get(related_products))
}

pub fn collections_router() -> Router<AppState> {
    Router::new().route("/", get(list_collections))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category" = Option<String>, Query, description = "Men, Women or Children"),
        ("collection" = Option<Uuid>, Query, description = "Collection id"),
        ("search" = Option<String>, Query, description = "Matches name or description"),
        ("sort" = Option<String>, Query, description = "newest, price_asc, price_desc, best_seller"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List active products", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let resp = product_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/best-sellers",
    responses(
        (status = 200, description = "Best selling products", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Products"
)]
pub async fn best_sellers(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let resp = product_service::best_sellers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/related",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Products in the same category", body = ApiResponse<Vec<Product>>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn related_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let resp = product_service::related_products(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/collections",
    params(
        ("home" = Option<bool>, Query, description = "Only collections shown on the home page")
    ),
    responses(
        (status = 200, description = "List collections", body = ApiResponse<Vec<Collection>>)
    ),
    tag = "Products"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> AppResult<Json<ApiResponse<Vec<Collection>>>> {
    let resp = collection_service::list_collections(&state, query).await?;
    Ok(Json(resp))
}
