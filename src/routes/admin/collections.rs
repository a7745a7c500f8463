use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::admin::CollectionInput,
    error::AppResult,
    extract::{Json, Path},
    middleware::auth::AdminPrincipal,
    models::Collection,
    response::{Ack, ApiResponse},
    services::collection_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_collections).post(create_collection))
        .route("/{id}", put(update_collection).delete(delete_collection))
}

#[utoipa::path(
    get,
    path = "/api/admin/collections",
    responses(
        (status = 200, description = "All collections", body = ApiResponse<Vec<Collection>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<Vec<Collection>>>> {
    let resp = collection_service::admin_list(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/collections",
    request_body = CollectionInput,
    responses(
        (status = 200, description = "Collection created", body = ApiResponse<Collection>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<CollectionInput>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = collection_service::create_collection(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    request_body = CollectionInput,
    responses(
        (status = 200, description = "Collection updated", body = ApiResponse<Collection>),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionInput>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = collection_service::update_collection(&state, &admin, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = collection_service::delete_collection(&state, &admin, id).await?;
    Ok(Json(resp))
}
