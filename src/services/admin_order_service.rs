use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::orders::{AddNoteRequest, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    lifecycle::orders::{self, Actor},
    middleware::auth::AdminPrincipal,
    models::{Order, OrderNote},
    response::{ApiResponse, paginate},
    routes::params::{OrderListQuery, SortOrder},
    services::record_admin_action,
    state::AppState,
    status::OrderStatus,
};

fn parse_status(raw: &str) -> AppResult<OrderStatus> {
    OrderStatus::parse(raw.trim())
        .ok_or_else(|| AppError::invalid(format!("unknown order status {raw:?}")))
}

pub async fn list_orders(
    state: &AppState,
    admin: &AdminPrincipal,
    query: OrderListQuery,
) -> AppResult<ApiResponse<Vec<Order>>> {
    admin.ensure_area(AdminArea::Orders)?;
    let (page, limit, _) = query.pagination().normalize();
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(parse_status(raw)?),
        None => None,
    };
    let newest_first = !matches!(query.sort_order, Some(SortOrder::Asc));

    let all = orders::list_all_orders(state.store.as_ref(), status, newest_first).await?;
    let (items, meta) = paginate(all, page, limit);
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn get_order(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    admin.ensure_area(AdminArea::Orders)?;
    Ok(ApiResponse::success(
        orders::get_any_order(state.store.as_ref(), id).await?,
    ))
}

pub async fn update_status(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    admin.ensure_area(AdminArea::Orders)?;
    let status = parse_status(&payload.status)?;

    let order =
        orders::update_order_status(state.store.clone(), state.transition_policy(), id, status)
            .await?;

    record_admin_action(
        state,
        admin,
        "Updated Order Status",
        format!("Order {} changed to {}", order.order_number, status.as_str()),
    )
    .await;

    Ok(ApiResponse::success(order))
}

pub async fn add_note(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: AddNoteRequest,
) -> AppResult<ApiResponse<OrderNote>> {
    admin.ensure_area(AdminArea::Orders)?;
    let actor = Actor {
        id: admin.admin_id,
        name: admin.name.clone(),
    };
    let note = orders::add_order_note(state.store.clone(), id, &actor, &payload.note).await?;

    record_admin_action(state, admin, "Added Order Note", format!("Note added to order {id}")).await;

    Ok(ApiResponse::success(note))
}
