use uuid::Uuid;

use crate::{
    dto::custom_requests::{CreateCustomRequest, RequestChangesRequest},
    error::{AppError, AppResult},
    lifecycle::requests::{self, NewRequest},
    middleware::auth::AuthUser,
    models::{CustomRequest, Placement},
    response::{ApiResponse, paginate},
    routes::params::Pagination,
    state::AppState,
};

pub async fn submit(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCustomRequest,
) -> AppResult<ApiResponse<CustomRequest>> {
    let placement = Placement::parse(payload.placement.trim())
        .ok_or_else(|| AppError::invalid("placement must be front, back or both"))?;

    let store = state.user_store(user.user_id);
    let request = requests::submit_request(
        &store,
        NewRequest {
            customer_name: user.name.clone(),
            color: payload.color,
            size: payload.size,
            placement,
            description: payload.description,
            image_url: payload.image_url,
        },
    )
    .await?;
    Ok(ApiResponse::success(request))
}

pub async fn list_mine(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<Vec<CustomRequest>>> {
    let (page, limit, _) = pagination.normalize();
    let store = state.user_store(user.user_id);
    let (items, meta) = paginate(requests::list_my_requests(&store).await?, page, limit);
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn get_mine(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<CustomRequest>> {
    let store = state.user_store(user.user_id);
    Ok(ApiResponse::success(requests::get_my_request(&store, id).await?))
}

pub async fn approve(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<CustomRequest>> {
    let store = state.user_store(user.user_id);
    Ok(ApiResponse::success(requests::approve(&store, id).await?))
}

pub async fn request_changes(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: RequestChangesRequest,
) -> AppResult<ApiResponse<CustomRequest>> {
    let store = state.user_store(user.user_id);
    let request = requests::request_changes(&store, id, &payload.notes).await?;
    Ok(ApiResponse::success(request))
}
