use axum::{
    Router,
    extract::State,
    routing::{get, put},
};

use crate::{
    dto::{admin::SizeGuideRequest, content::SizeGuide},
    error::AppResult,
    extract::Json,
    middleware::auth::AdminPrincipal,
    models::{DeliverySettings, StoreSettings, ThemeSettings},
    response::ApiResponse,
    services::settings_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/store", get(get_store).put(update_store))
        .route("/delivery", get(get_delivery).put(update_delivery))
        .route("/theme", get(get_theme).put(update_theme))
        .route("/size-guide", put(update_size_guide))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings/store",
    responses(
        (status = 200, description = "Store settings", body = ApiResponse<StoreSettings>),
        (status = 403, description = "Owner only")
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn get_store(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<StoreSettings>>> {
    let resp = settings_service::get_store(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings/store",
    request_body = StoreSettings,
    responses(
        (status = 200, description = "Store settings saved", body = ApiResponse<StoreSettings>),
        (status = 403, description = "Owner only")
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn update_store(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<StoreSettings>,
) -> AppResult<Json<ApiResponse<StoreSettings>>> {
    let resp = settings_service::update_store(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings/delivery",
    responses(
        (status = 200, description = "Delivery settings", body = ApiResponse<DeliverySettings>)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn get_delivery(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<DeliverySettings>>> {
    let resp = settings_service::get_delivery(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings/delivery",
    request_body = DeliverySettings,
    responses(
        (status = 200, description = "Delivery settings saved", body = ApiResponse<DeliverySettings>),
        (status = 400, description = "Negative amounts")
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn update_delivery(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<DeliverySettings>,
) -> AppResult<Json<ApiResponse<DeliverySettings>>> {
    let resp = settings_service::update_delivery(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings/theme",
    responses(
        (status = 200, description = "Theme settings", body = ApiResponse<ThemeSettings>)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn get_theme(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<ThemeSettings>>> {
    let resp = settings_service::get_theme(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings/theme",
    request_body = ThemeSettings,
    responses(
        (status = 200, description = "Theme settings saved", body = ApiResponse<ThemeSettings>)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn update_theme(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<ThemeSettings>,
) -> AppResult<Json<ApiResponse<ThemeSettings>>> {
    let resp = settings_service::update_theme(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings/size-guide",
    request_body = SizeGuideRequest,
    responses(
        (status = 200, description = "Size guide saved", body = ApiResponse<SizeGuide>)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
pub async fn update_size_guide(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<SizeGuideRequest>,
) -> AppResult<Json<ApiResponse<SizeGuide>>> {
    let resp = settings_service::update_size_guide(&state, &admin, payload).await?;
    Ok(Json(resp))
}
