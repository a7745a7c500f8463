use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::admin::{CreateAdminUserRequest, UpdateAdminUserRequest},
    error::AppResult,
    extract::{Json, Path},
    middleware::auth::AdminPrincipal,
    models::AdminUser,
    response::ApiResponse,
    services::admin_user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admin_users).post(create_admin_user))
        .route("/{id}", put(update_admin_user))
}

#[utoipa::path(
    get,
    path = "/api/admin/admin-users",
    responses(
        (status = 200, description = "Back-office accounts", body = ApiResponse<Vec<AdminUser>>),
        (status = 403, description = "Owner only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_admin_users(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<Vec<AdminUser>>>> {
    let resp = admin_user_service::list_admin_users(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/admin-users",
    request_body = CreateAdminUserRequest,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<AdminUser>),
        (status = 409, description = "Email already taken")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_admin_user(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<CreateAdminUserRequest>,
) -> AppResult<Json<ApiResponse<AdminUser>>> {
    let resp = admin_user_service::create_admin_user(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/admin-users/{id}",
    params(
        ("id" = Uuid, Path, description = "Admin user ID")
    ),
    request_body = UpdateAdminUserRequest,
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<AdminUser>),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Would leave the store without an active owner")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_admin_user(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAdminUserRequest>,
) -> AppResult<Json<ApiResponse<AdminUser>>> {
    let resp = admin_user_service::update_admin_user(&state, &admin, id, payload).await?;
    Ok(Json(resp))
}
