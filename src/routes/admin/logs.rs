use axum::{
    Router,
    extract::State,
    routing::get,
};

use crate::{
    error::AppResult,
    extract::{Json, Query},
    middleware::auth::AdminPrincipal,
    models::AdminLog,
    response::ApiResponse,
    routes::params::Pagination,
    services::log_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_logs))
}

#[utoipa::path(
    get,
    path = "/api/admin/logs",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Activity log, newest first", body = ApiResponse<Vec<AdminLog>>),
        (status = 403, description = "Owner only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_logs(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<AdminLog>>>> {
    let resp = log_service::list_logs(&state, &admin, pagination).await?;
    Ok(Json(resp))
}
