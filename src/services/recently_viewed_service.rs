use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    lifecycle::browsing,
    middleware::auth::AuthUser,
    models::Product,
    response::{Ack, ApiResponse},
    services::product_service::{find_product, products_in_order},
    state::AppState,
};

pub async fn list(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Vec<Product>>> {
    let store = state.user_store(user.user_id);
    let ids = browsing::recently_viewed(&store).await?;
    Ok(ApiResponse::success(products_in_order(state, &ids).await?))
}

pub async fn record(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
) -> AppResult<ApiResponse<Ack>> {
    if find_product(&state.orm, product_id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let store = state.user_store(user.user_id);
    browsing::record_view(&store, product_id).await?;
    Ok(ApiResponse::success(Ack::ok()))
}
