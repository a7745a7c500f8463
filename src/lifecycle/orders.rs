use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    cart::{self, NewCartLine},
    notifications::{self, NewNotification},
    require_text, status_label,
};
use crate::{
    error::{AppError, AppResult},
    models::{
        CartItem, Order, OrderItem, OrderNote, OrderStatusChange, PaymentMethod, Product,
        ProductStatus, RelatedType, ShippingInfo,
    },
    status::{OrderStatus, PaymentStatus, TransitionPolicy, check_order_transition},
    store::{Storage, StoreKey, UserStore, scan_lists},
};

/// Who performed an admin-side change.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub size: String,
    pub color: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOutcome {
    pub message: String,
    pub added: Vec<CartItem>,
    pub skipped: Vec<SkippedLine>,
}

fn build_order_number(order_id: Uuid) -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = order_id.simple().to_string();
    format!("ORD-{}-{}", date, &suffix[..8])
}

fn validate_shipping(shipping: &ShippingInfo) -> AppResult<()> {
    require_text(&shipping.name, "shipping name")?;
    require_text(&shipping.phone, "shipping phone")?;
    require_text(&shipping.address, "shipping address")?;
    require_text(&shipping.city, "shipping city")?;
    require_text(&shipping.postal_code, "shipping postal code")?;
    Ok(())
}

/// Turn the current cart into an order.
///
/// Nothing is written unless the cart is non-empty and every shipping field
/// is filled in. On success the cart is emptied and the customer is notified.
pub async fn create_order(
    store: &UserStore,
    customer_email: &str,
    shipping: ShippingInfo,
    delivery_fee: Decimal,
) -> AppResult<Order> {
    let user_id = store.require_user()?;
    let cart = cart::get_cart(store).await?;
    if cart.is_empty() {
        return Err(AppError::invalid("cart is empty"));
    }
    validate_shipping(&shipping)?;

    let items: Vec<OrderItem> = cart
        .iter()
        .map(|line| OrderItem {
            id: Uuid::new_v4(),
            product_id: line.product_id,
            product_name: line.product_name.clone(),
            product_image: line.product_image.clone(),
            size: line.variant.size,
            color: line.variant.color.clone(),
            price: line.price,
            quantity: line.quantity,
        })
        .collect();
    let subtotal: Decimal = cart.iter().map(CartItem::line_total).sum();

    let now = Utc::now();
    let id = Uuid::new_v4();
    let order = Order {
        id,
        order_number: build_order_number(id),
        user_id,
        customer_email: customer_email.to_string(),
        shipping,
        items,
        subtotal,
        delivery_fee,
        total_amount: subtotal + delivery_fee,
        payment_method: PaymentMethod::Cod,
        payment_status: PaymentStatus::Unpaid,
        order_status: OrderStatus::Received,
        history: vec![OrderStatusChange {
            id: Uuid::new_v4(),
            status: OrderStatus::Received,
            timestamp: now,
            note: None,
        }],
        notes: Vec::new(),
        created_at: now,
    };

    let mut orders: Vec<Order> = store.get(StoreKey::Orders, Vec::new()).await?;
    orders.insert(0, order.clone());
    // Cart before order; a failed order write puts the lines back.
    cart::clear_cart(store).await?;
    if let Err(err) = store.set(StoreKey::Orders, &orders).await {
        if let Err(restore) = store.set(StoreKey::Cart, &cart).await {
            tracing::error!(error = %restore, "could not restore cart after failed checkout");
        }
        return Err(err);
    }

    notifications::notify(
        store,
        NewNotification {
            title: "Order placed".into(),
            message: format!("We received your order {}.", order.order_number),
            related_type: RelatedType::Order,
            related_id: order.id,
        },
    )
    .await;

    tracing::info!(order_id = %order.id, user_id = %user_id, total = %order.total_amount, "order created");
    Ok(order)
}

fn customer_view(mut order: Order) -> Order {
    order.notes.clear();
    order
}

/// The customer's own orders, newest first, without internal notes.
pub async fn list_my_orders(store: &UserStore) -> AppResult<Vec<Order>> {
    let orders: Vec<Order> = store.get(StoreKey::Orders, Vec::new()).await?;
    Ok(orders.into_iter().map(customer_view).collect())
}

pub async fn get_my_order(store: &UserStore, order_id: Uuid) -> AppResult<Order> {
    let orders: Vec<Order> = store.get(StoreKey::Orders, Vec::new()).await?;
    orders
        .into_iter()
        .find(|o| o.id == order_id)
        .map(customer_view)
        .ok_or(AppError::NotFound)
}

/// Every customer's orders, optionally filtered by status.
pub async fn list_all_orders(
    storage: &dyn Storage,
    status: Option<OrderStatus>,
    newest_first: bool,
) -> AppResult<Vec<Order>> {
    let mut orders: Vec<Order> = scan_lists::<Order>(storage, StoreKey::Orders)
        .await?
        .into_iter()
        .flat_map(|(_, list)| list)
        .filter(|o| status.is_none_or(|s| o.order_status == s))
        .collect();
    if newest_first {
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    } else {
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }
    Ok(orders)
}

pub async fn get_any_order(storage: &dyn Storage, order_id: Uuid) -> AppResult<Order> {
    let (_, orders, index) = locate_order(storage, order_id).await?;
    Ok(orders[index].clone())
}

/// Find which customer holds `order_id`.
async fn locate_order(
    storage: &dyn Storage,
    order_id: Uuid,
) -> AppResult<(Uuid, Vec<Order>, usize)> {
    for (user_id, orders) in scan_lists::<Order>(storage, StoreKey::Orders).await? {
        if let Some(index) = orders.iter().position(|o| o.id == order_id) {
            return Ok((user_id, orders, index));
        }
    }
    Err(AppError::NotFound)
}

/// Move an order to `status`, recording exactly one history entry.
pub async fn update_order_status(
    storage: Arc<dyn Storage>,
    policy: TransitionPolicy,
    order_id: Uuid,
    status: OrderStatus,
) -> AppResult<Order> {
    let (owner, mut orders, index) = locate_order(storage.as_ref(), order_id).await?;
    let order = &mut orders[index];
    check_order_transition(policy, order.order_status, status)?;

    order.order_status = status;
    order.history.push(OrderStatusChange {
        id: Uuid::new_v4(),
        status,
        timestamp: Utc::now(),
        note: None,
    });
    if status == OrderStatus::Delivered && order.payment_method == PaymentMethod::Cod {
        order.payment_status = PaymentStatus::Paid;
    }
    let updated = order.clone();

    let owner_store = UserStore::new(storage, Some(owner));
    owner_store.set(StoreKey::Orders, &orders).await?;

    notifications::notify(
        &owner_store,
        NewNotification {
            title: "Order status updated".into(),
            message: format!(
                "Your order {} is now {}.",
                updated.order_number,
                status_label(status.as_str())
            ),
            related_type: RelatedType::Order,
            related_id: updated.id,
        },
    )
    .await;

    Ok(updated)
}

/// Internal admin note; customers never see these.
pub async fn add_order_note(
    storage: Arc<dyn Storage>,
    order_id: Uuid,
    actor: &Actor,
    note: &str,
) -> AppResult<OrderNote> {
    require_text(note, "note")?;
    let (owner, mut orders, index) = locate_order(storage.as_ref(), order_id).await?;
    let entry = OrderNote {
        id: Uuid::new_v4(),
        admin_id: actor.id,
        admin_name: actor.name.clone(),
        note: note.trim().to_string(),
        created_at: Utc::now(),
    };
    orders[index].notes.push(entry.clone());
    UserStore::new(storage, Some(owner))
        .set(StoreKey::Orders, &orders)
        .await?;
    Ok(entry)
}

/// Put the lines of a past order back into the cart at today's prices.
///
/// `catalog` maps product ids to their current state; lines that can no
/// longer be bought are reported in `skipped`.
pub async fn reorder(
    store: &UserStore,
    order_id: Uuid,
    catalog: &HashMap<Uuid, Product>,
) -> AppResult<ReorderOutcome> {
    store.require_user()?;
    let order = get_my_order(store, order_id).await?;
    let mut cart_lines = cart::get_cart(store).await?;
    let mut added = Vec::new();
    let mut skipped = Vec::new();

    for item in &order.items {
        let skip = |reason: &str| SkippedLine {
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            size: item.size.as_str().to_string(),
            color: item.color.clone(),
            reason: reason.to_string(),
        };

        let Some(product) = catalog.get(&item.product_id) else {
            skipped.push(skip("product is no longer available"));
            continue;
        };
        if product.status != ProductStatus::Active {
            skipped.push(skip("product is not currently for sale"));
            continue;
        }
        let Some(variant) = product.find_variant(item.size, &item.color) else {
            skipped.push(skip("size and color are no longer offered"));
            continue;
        };
        if variant.stock <= 0 {
            skipped.push(skip("out of stock"));
            continue;
        }

        let line = NewCartLine::from_product(product, variant, item.quantity);
        match cart::merge_line(&mut cart_lines, line) {
            Ok(item) => added.push(item),
            Err(_) => skipped.push(skip("cart already holds the most allowed for this item")),
        }
    }

    if !added.is_empty() {
        store.set(StoreKey::Cart, &cart_lines).await?;
    }

    let message = if skipped.is_empty() {
        "Items added to cart.".to_string()
    } else if added.is_empty() {
        "None of the items are available any more.".to_string()
    } else {
        "Some items could not be added to cart.".to_string()
    };

    Ok(ReorderOutcome {
        message,
        added,
        skipped,
    })
}
