use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::{admin::CustomerDetail, orders::AddNoteRequest},
    entity::users::{Column as UserCol, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    lifecycle::{orders, require_text},
    middleware::auth::AdminPrincipal,
    models::{Customer, CustomerNote, Order},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::record_admin_action,
    state::AppState,
    status::OrderStatus,
    store::StoreKey,
};

/// Order aggregates for one customer. Cancelled orders count towards the
/// number of orders but not towards the amount spent.
pub fn summarize_customer(user: &UserModel, orders: &[Order]) -> Customer {
    let total_spent = orders
        .iter()
        .filter(|o| o.order_status != OrderStatus::Cancelled)
        .map(|o| o.total_amount)
        .sum::<Decimal>();
    Customer {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        orders_count: orders.len() as i64,
        total_spent,
        last_order_date: orders.iter().map(|o| o.created_at).max(),
    }
}

pub async fn list_customers(
    state: &AppState,
    admin: &AdminPrincipal,
    pagination: Pagination,
) -> AppResult<ApiResponse<Vec<Customer>>> {
    admin.ensure_area(AdminArea::Customers)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = Users::find().order_by_desc(UserCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let users = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;

    let mut by_user: HashMap<Uuid, Vec<Order>> = HashMap::new();
    for order in orders::list_all_orders(state.store.as_ref(), None, true).await? {
        by_user.entry(order.user_id).or_default().push(order);
    }

    let customers = users
        .iter()
        .map(|user| {
            let orders = by_user.get(&user.id).map(Vec::as_slice).unwrap_or_default();
            summarize_customer(user, orders)
        })
        .collect();

    Ok(ApiResponse::paginated(customers, Meta::new(page, limit, total)))
}

pub async fn get_customer(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<CustomerDetail>> {
    admin.ensure_area(AdminArea::Customers)?;
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let store = state.user_store(id);
    let orders: Vec<Order> = store.get(StoreKey::Orders, Vec::new()).await?;
    let notes: Vec<CustomerNote> = store.get(StoreKey::CustomerNotes, Vec::new()).await?;

    Ok(ApiResponse::success(CustomerDetail {
        customer: summarize_customer(&user, &orders),
        orders,
        notes,
    }))
}

pub async fn add_note(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: AddNoteRequest,
) -> AppResult<ApiResponse<CustomerNote>> {
    admin.ensure_area(AdminArea::Customers)?;
    require_text(&payload.note, "note")?;
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let store = state.user_store(id);
    let mut notes: Vec<CustomerNote> = store.get(StoreKey::CustomerNotes, Vec::new()).await?;
    let note = CustomerNote {
        id: Uuid::new_v4(),
        admin_id: admin.admin_id,
        admin_name: admin.name.clone(),
        note: payload.note.trim().to_string(),
        created_at: Utc::now(),
    };
    notes.insert(0, note.clone());
    store.set(StoreKey::CustomerNotes, &notes).await?;

    record_admin_action(
        state,
        admin,
        "Added Customer Note",
        format!("Note added to customer {}", user.email),
    )
    .await;

    Ok(ApiResponse::success(note))
}
