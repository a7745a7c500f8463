use uuid::Uuid;

use crate::{
    dto::orders::{CheckoutRequest, CheckoutResponse},
    error::{AppError, AppResult},
    lifecycle::{
        cart,
        orders::{self, ReorderOutcome},
    },
    mapper::map_delivery_settings,
    middleware::auth::AuthUser,
    models::Order,
    response::{ApiResponse, paginate},
    routes::params::Pagination,
    services::{content_service::load_settings, product_service::load_catalog},
    state::AppState,
};

pub async fn checkout(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<CheckoutResponse>> {
    if let Some(method) = payload.payment_method.as_deref() {
        if !method.eq_ignore_ascii_case("cod") {
            return Err(AppError::invalid("only cash on delivery is supported"));
        }
    }

    let store = state.user_store(user.user_id);
    let summary = cart::cart_summary(&store).await?;
    let delivery = map_delivery_settings(&load_settings(&state.orm).await?);
    let fee = delivery.fee_for(summary.subtotal);

    let order = orders::create_order(&store, &user.email, payload.shipping.into(), fee).await?;

    Ok(ApiResponse::success(CheckoutResponse {
        order_id: order.id,
        order_number: order.order_number,
        total_amount: order.total_amount,
    }))
}

pub async fn list_my_orders(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let (page, limit, _) = pagination.normalize();
    let store = state.user_store(user.user_id);
    let all = orders::list_my_orders(&store).await?;
    let (items, meta) = paginate(all, page, limit);
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn get_my_order(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let store = state.user_store(user.user_id);
    Ok(ApiResponse::success(orders::get_my_order(&store, id).await?))
}

/// "Buy again": copy a past order's lines into the cart where still possible.
pub async fn reorder(state: &AppState, user: &AuthUser, id: Uuid) -> AppResult<ApiResponse<ReorderOutcome>> {
    let store = state.user_store(user.user_id);
    let order = orders::get_my_order(&store, id).await?;
    let product_ids = order.items.iter().map(|i| i.product_id).collect();
    let catalog = load_catalog(state, product_ids).await?;

    let outcome = orders::reorder(&store, id, &catalog).await?;
    tracing::info!(
        order_id = %id,
        added = outcome.added.len(),
        skipped = outcome.skipped.len(),
        "reorder processed"
    );
    Ok(ApiResponse::success(outcome))
}
