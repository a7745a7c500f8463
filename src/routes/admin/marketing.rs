use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::admin::{AnnouncementRequest, HeroSlideInput},
    error::AppResult,
    extract::{Json, Path},
    middleware::auth::AdminPrincipal,
    models::{HeroSlide, StoreSettings},
    response::{Ack, ApiResponse},
    services::marketing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/announcement", put(update_announcement))
        .route("/hero-slides", get(list_slides).post(create_slide))
        .route("/hero-slides/{id}", put(update_slide).delete(delete_slide))
}

#[utoipa::path(
    put,
    path = "/api/admin/announcement",
    request_body = AnnouncementRequest,
    responses(
        (status = 200, description = "Announcement bar updated", body = ApiResponse<StoreSettings>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<AnnouncementRequest>,
) -> AppResult<Json<ApiResponse<StoreSettings>>> {
    let resp = marketing_service::update_announcement(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/hero-slides",
    responses(
        (status = 200, description = "All hero slides by sort order", body = ApiResponse<Vec<HeroSlide>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_slides(
    State(state): State<AppState>,
    admin: AdminPrincipal,
) -> AppResult<Json<ApiResponse<Vec<HeroSlide>>>> {
    let resp = marketing_service::list_slides(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/hero-slides",
    request_body = HeroSlideInput,
    responses(
        (status = 200, description = "Slide created", body = ApiResponse<HeroSlide>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_slide(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Json(payload): Json<HeroSlideInput>,
) -> AppResult<Json<ApiResponse<HeroSlide>>> {
    let resp = marketing_service::create_slide(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/hero-slides/{id}",
    params(
        ("id" = Uuid, Path, description = "Slide ID")
    ),
    request_body = HeroSlideInput,
    responses(
        (status = 200, description = "Slide updated", body = ApiResponse<HeroSlide>),
        (status = 404, description = "Slide not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_slide(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
    Json(payload): Json<HeroSlideInput>,
) -> AppResult<Json<ApiResponse<HeroSlide>>> {
    let resp = marketing_service::update_slide(&state, &admin, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/hero-slides/{id}",
    params(
        ("id" = Uuid, Path, description = "Slide ID")
    ),
    responses(
        (status = 200, description = "Slide deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Slide not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_slide(
    State(state): State<AppState>,
    admin: AdminPrincipal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = marketing_service::delete_slide(&state, &admin, id).await?;
    Ok(Json(resp))
}
