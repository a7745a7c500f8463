use uuid::Uuid;

use crate::{
    dto::content::UnreadCount,
    error::AppResult,
    lifecycle::notifications,
    middleware::auth::AuthUser,
    models::Notification,
    response::{Ack, ApiResponse, paginate},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<Vec<Notification>>> {
    let (page, limit, _) = pagination.normalize();
    let store = state.user_store(user.user_id);
    let (items, meta) = paginate(notifications::list(&store).await?, page, limit);
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn unread_count(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<UnreadCount>> {
    let store = state.user_store(user.user_id);
    let count = notifications::unread_count(&store).await? as i64;
    Ok(ApiResponse::success(UnreadCount { count }))
}

pub async fn mark_read(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<ApiResponse<Ack>> {
    let store = state.user_store(user.user_id);
    notifications::mark_read(&store, id).await?;
    Ok(ApiResponse::success(Ack::ok()))
}

pub async fn mark_all_read(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Ack>> {
    let store = state.user_store(user.user_id);
    notifications::mark_all_read(&store).await?;
    Ok(ApiResponse::success(Ack::ok()))
}
