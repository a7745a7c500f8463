use axum::{
    Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::auth::{AdminAuthResponse, LoginRequest},
    error::AppResult,
    extract::Json,
    middleware::auth::AdminPrincipal,
    models::AdminUser,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login admin", body = ApiResponse<AdminAuthResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account disabled")
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AdminAuthResponse>>> {
    let resp = auth_service::admin_login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/auth/me",
    responses(
        (status = 200, description = "Current admin", body = ApiResponse<AdminUser>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn me(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<AdminUser>>> {
    let resp = auth_service::admin_me(&state, &admin).await?;
    Ok(Json(resp))
}
