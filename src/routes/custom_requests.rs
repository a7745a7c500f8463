use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::custom_requests::{CreateCustomRequest, RequestChangesRequest},
    error::AppResult,
    extract::{Json, Path, Query},
    middleware::auth::AuthUser,
    models::CustomRequest,
    response::ApiResponse,
    routes::params::Pagination,
    services::custom_request_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(submit_request))
        .route("/{id}", get(get_request))
        .route("/{id}/approve", post(approve))
        .route("/{id}/request-changes", post(request_changes))
}

#[utoipa::path(
    post,
    path = "/api/custom-requests",
    request_body = CreateCustomRequest,
    responses(
        (status = 200, description = "Request submitted", body = ApiResponse<CustomRequest>),
        (status = 400, description = "Missing description, color or size")
    ),
    security(("bearer_auth" = [])),
    tag = "Custom Requests"
)]
pub async fn submit_request(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCustomRequest>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = custom_request_service::submit(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/custom-requests",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Own requests, newest first", body = ApiResponse<Vec<CustomRequest>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Custom Requests"
)]
pub async fn list_requests(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<CustomRequest>>>> {
    let resp = custom_request_service::list_mine(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/custom-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Custom request ID")
    ),
    responses(
        (status = 200, description = "Request detail", body = ApiResponse<CustomRequest>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Custom Requests"
)]
pub async fn get_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = custom_request_service::get_mine(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/custom-requests/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Custom request ID")
    ),
    responses(
        (status = 200, description = "Design approved", body = ApiResponse<CustomRequest>),
        (status = 409, description = "No preview awaiting review")
    ),
    security(("bearer_auth" = [])),
    tag = "Custom Requests"
)]
pub async fn approve(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = custom_request_service::approve(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/custom-requests/{id}/request-changes",
    params(
        ("id" = Uuid, Path, description = "Custom request ID")
    ),
    request_body = RequestChangesRequest,
    responses(
        (status = 200, description = "Request sent back to the designer", body = ApiResponse<CustomRequest>),
        (status = 409, description = "No preview awaiting review")
    ),
    security(("bearer_auth" = [])),
    tag = "Custom Requests"
)]
pub async fn request_changes(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RequestChangesRequest>,
) -> AppResult<Json<ApiResponse<CustomRequest>>> {
    let resp = custom_request_service::request_changes(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
