use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, UpdateCartItemRequest},
    error::{AppError, AppResult},
    lifecycle::cart::{self, CartSummary, NewCartLine},
    middleware::auth::AuthUser,
    models::{CartItem, ProductStatus, Size},
    response::{Ack, ApiResponse},
    services::product_service::find_product,
    state::AppState,
};

pub async fn get_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartSummary>> {
    let store = state.user_store(user.user_id);
    Ok(ApiResponse::success(cart::cart_summary(&store).await?))
}

/// Resolve the product and variant, then add the line at today's price.
pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    if payload.quantity < 1 {
        return Err(AppError::invalid("quantity must be at least 1"));
    }
    let size = Size::parse(&payload.size)
        .ok_or_else(|| AppError::invalid(format!("unknown size {:?}", payload.size)))?;

    let product = find_product(&state.orm, payload.product_id)
        .await?
        .filter(|p| p.status == ProductStatus::Active)
        .ok_or(AppError::NotFound)?;
    let variant = product
        .find_variant(size, &payload.color)
        .ok_or_else(|| AppError::invalid("this size and color is not available"))?;
    if variant.stock <= 0 {
        return Err(AppError::invalid("this size and color is out of stock"));
    }

    let store = state.user_store(user.user_id);
    let line = NewCartLine::from_product(&product, variant, payload.quantity);
    let item = cart::add_to_cart(&store, line).await?;
    Ok(ApiResponse::success(item))
}

pub async fn update_cart_item(
    state: &AppState,
    user: &AuthUser,
    item_id: Uuid,
    payload: UpdateCartItemRequest,
) -> AppResult<ApiResponse<CartItem>> {
    let store = state.user_store(user.user_id);
    let item = cart::update_cart_item(&store, item_id, payload.quantity).await?;
    Ok(ApiResponse::success(item))
}

pub async fn remove_cart_item(
    state: &AppState,
    user: &AuthUser,
    item_id: Uuid,
) -> AppResult<ApiResponse<Ack>> {
    let store = state.user_store(user.user_id);
    cart::remove_cart_item(&store, item_id).await?;
    Ok(ApiResponse::success(Ack::ok()))
}

pub async fn clear_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Ack>> {
    let store = state.user_store(user.user_id);
    cart::clear_cart(&store).await?;
    Ok(ApiResponse::success(Ack::ok()))
}
