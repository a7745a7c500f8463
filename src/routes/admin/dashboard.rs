use axum::{Router, extract::State, routing::get};

use crate::{
    dto::admin::DashboardData,
    error::AppResult,
    extract::Json,
    middleware::auth::AdminPrincipal,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Sales figures and recent activity", body = ApiResponse<DashboardData>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<DashboardData>>> {
    let resp = dashboard_service::dashboard(&state, &admin).await?;
    Ok(Json(resp))
}
