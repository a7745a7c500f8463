use axum::{
    Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::content::{ContactRequest, HomeContent, MessageResponse, SizeGuide},
    error::AppResult,
    extract::Json,
    models::FaqItem,
    response::ApiResponse,
    services::content_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content/home", get(home))
        .route("/faq", get(faq))
        .route("/size-guide", get(size_guide))
        .route("/contact", post(contact))
}

#[utoipa::path(
    get,
    path = "/api/content/home",
    responses(
        (status = 200, description = "Home page content", body = ApiResponse<HomeContent>)
    ),
    tag = "Content"
)]
pub async fn home(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HomeContent>>> {
    let resp = content_service::home_content(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/faq",
    responses(
        (status = 200, description = "Frequently asked questions", body = ApiResponse<Vec<FaqItem>>)
    ),
    tag = "Content"
)]
pub async fn faq(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<FaqItem>>>> {
    let resp = content_service::faq(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/size-guide",
    responses(
        (status = 200, description = "Size guide", body = ApiResponse<SizeGuide>)
    ),
    tag = "Content"
)]
pub async fn size_guide(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SizeGuide>>> {
    let resp = content_service::size_guide(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ApiResponse<MessageResponse>),
        (status = 400, description = "Invalid input")
    ),
    tag = "Content"
)]
pub async fn contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ApiResponse<MessageResponse>>> {
    let resp = content_service::submit_contact(&state, payload).await?;
    Ok(Json(resp))
}
