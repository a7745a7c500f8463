use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::custom_requests::{UpdateRequestStatusRequest, UploadPreviewRequest},
    error::AppResult,
    extract::{Json, Path, Query},
    middleware::auth::AdminPrincipal,
    models::CustomRequest,
    response::ApiResponse,
    routes::params::RequestListQuery,
    services::admin_request_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests))
        .route("/{id}", get(get_request))
        .route("/{id}/preview", put(upload_preview))
        .route("/{id}/status", put(update_request_status))
}

#[utoipa::path(
    get,
    path = "/api/admin/custom-requests",
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Custom requests, newest first", body = ApiResponse<Vec<CustomRequest>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_requests(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Query(query): Query<RequestListQuery>,
) -> AppResult<Json<ApiResponse<Vec<CustomRequest>>>> {
    let resp = admin_request_service::list_requests(&state, &admin, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/custom-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Custom request ID")
    ),
    responses(
        (status = 200, description = "Request detail", body = ApiResponse<CustomRequest>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_request(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = admin_request_service::get_request(&state, &admin, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/custom-requests/{id}/preview",
    params(
        ("id" = Uuid, Path, description = "Custom request ID")
    ),
    request_body = UploadPreviewRequest,
    responses(
        (status = 200, description = "Preview attached and sent", body = ApiResponse<CustomRequest>),
        (status = 409, description = "Transition not allowed")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn upload_preview(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UploadPreviewRequest>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = admin_request_service::upload_preview(&state, &admin, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/custom-requests/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Custom request ID")
    ),
    request_body = UpdateRequestStatusRequest,
    responses(
        (status = 200, description = "Request status updated", body = ApiResponse<CustomRequest>),
        (status = 400, description = "Unknown status"),
        (status = 409, description = "Transition not allowed")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRequestStatusRequest>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = admin_request_service::update_status(&state, &admin, id, payload).await?;
    Ok(Json(resp))
}
