mod common;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use common::{customer_store, line, memory, tee, variant};
use merch_storefront_api::{
    error::{AppError, AppResult},
    lifecycle::{
        cart, notifications,
        orders::{self, Actor},
    },
    models::{DeliverySettings, Product, ProductStatus, ShippingInfo, Size},
    status::{OrderStatus, PaymentStatus, TransitionPolicy, check_order_transition},
    store::{MemoryStorage, Storage, StoreKey, UserStore},
};

fn shipping() -> ShippingInfo {
    ShippingInfo {
        name: "Ada Lovelace".into(),
        phone: "0123456789".into(),
        address: "12 Analytical Way".into(),
        city: "London".into(),
        postal_code: "N1 9GU".into(),
    }
}

/// Memory storage whose writes to one key can be made to fail.
#[derive(Default)]
struct FailingWrites {
    inner: MemoryStorage,
    failing: Mutex<Option<StoreKey>>,
}

impl FailingWrites {
    fn fail_on(&self, key: StoreKey) {
        *self.failing.lock().unwrap() = Some(key);
    }

    fn fail_on_nothing(&self) {
        *self.failing.lock().unwrap() = None;
    }
}

#[async_trait]
impl Storage for FailingWrites {
    async fn get(&self, scope: Uuid, key: StoreKey) -> AppResult<Option<Value>> {
        self.inner.get(scope, key).await
    }

    async fn set(&self, scope: Uuid, key: StoreKey, value: Value) -> AppResult<()> {
        if *self.failing.lock().unwrap() == Some(key) {
            return Err(AppError::Internal(anyhow::anyhow!("write to {} refused", key.as_str())));
        }
        self.inner.set(scope, key, value).await
    }

    async fn delete(&self, scope: Uuid, key: StoreKey) -> AppResult<()> {
        self.inner.delete(scope, key).await
    }

    async fn scan(&self, key: StoreKey) -> AppResult<Vec<(Uuid, Value)>> {
        self.inner.scan(key).await
    }
}

async fn place_order(store: &UserStore, product: &Product, quantity: i32) -> merch_storefront_api::models::Order {
    cart::add_to_cart(store, line(product, quantity)).await.unwrap();
    orders::create_order(store, "ada@example.com", shipping(), Decimal::new(5, 0))
        .await
        .unwrap()
}

#[tokio::test]
async fn checkout_totals_items_plus_fee_and_empties_cart() {
    let storage = memory();
    let (user_id, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);

    let order = place_order(&store, &product, 2).await;

    assert_eq!(order.subtotal, Decimal::new(5998, 2));
    assert_eq!(order.total_amount, Decimal::new(6498, 2));
    assert_eq!(order.user_id, user_id);
    assert_eq!(order.order_status, OrderStatus::Received);
    assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    assert_eq!(order.history.len(), 1);
    assert!(order.order_number.starts_with("ORD-"));
    assert!(cart::get_cart(&store).await.unwrap().is_empty());

    let mine = orders::list_my_orders(&store).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, order.id);
    assert_eq!(notifications::unread_count(&store).await.unwrap(), 1);
}

#[tokio::test]
async fn empty_cart_checkout_writes_nothing() {
    let storage = memory();
    let (_, store) = customer_store(&storage);

    let err = orders::create_order(&store, "ada@example.com", shipping(), Decimal::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(orders::list_my_orders(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_shipping_field_keeps_the_cart() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    cart::add_to_cart(&store, line(&tee("crew", 2999, None), 1)).await.unwrap();

    let mut incomplete = shipping();
    incomplete.city = "  ".into();
    let err = orders::create_order(&store, "ada@example.com", incomplete, Decimal::ZERO)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(cart::get_cart(&store).await.unwrap().len(), 1);
    assert!(orders::list_my_orders(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn status_update_appends_exactly_one_history_entry() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let order = place_order(&store, &tee("crew", 2999, None), 1).await;

    let updated = orders::update_order_status(
        storage.clone(),
        TransitionPolicy::Enforce,
        order.id,
        OrderStatus::InPacking,
    )
    .await
    .unwrap();

    assert_eq!(updated.order_status, OrderStatus::InPacking);
    assert_eq!(updated.history.len(), 2);
    assert_eq!(updated.history[1].status, OrderStatus::InPacking);

    let stored = orders::get_my_order(&store, order.id).await.unwrap();
    assert_eq!(stored.history.len(), 2);
    assert_eq!(notifications::unread_count(&store).await.unwrap(), 2);
}

#[tokio::test]
async fn backwards_move_is_refused_when_enforcing() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let order = place_order(&store, &tee("crew", 2999, None), 1).await;

    orders::update_order_status(storage.clone(), TransitionPolicy::Enforce, order.id, OrderStatus::Shipped)
        .await
        .unwrap();
    let err = orders::update_order_status(
        storage.clone(),
        TransitionPolicy::Enforce,
        order.id,
        OrderStatus::InReview,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let permissive = orders::update_order_status(
        storage.clone(),
        TransitionPolicy::Permissive,
        order.id,
        OrderStatus::InReview,
    )
    .await
    .unwrap();
    assert_eq!(permissive.history.len(), 3);
}

#[tokio::test]
async fn delivered_cash_order_is_marked_paid() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let order = place_order(&store, &tee("crew", 2999, None), 1).await;

    let delivered = orders::update_order_status(
        storage.clone(),
        TransitionPolicy::Enforce,
        order.id,
        OrderStatus::Delivered,
    )
    .await
    .unwrap();
    assert_eq!(delivered.payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn admin_notes_are_hidden_from_the_customer() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let order = place_order(&store, &tee("crew", 2999, None), 1).await;
    let actor = Actor {
        id: Uuid::new_v4(),
        name: "Staff".into(),
    };

    orders::add_order_note(storage.clone(), order.id, &actor, "call before delivery")
        .await
        .unwrap();

    let admin_view = orders::get_any_order(storage.as_ref(), order.id).await.unwrap();
    assert_eq!(admin_view.notes.len(), 1);
    let customer_view = orders::get_my_order(&store, order.id).await.unwrap();
    assert!(customer_view.notes.is_empty());
}

#[tokio::test]
async fn other_customers_cannot_read_an_order() {
    let storage = memory();
    let (_, alice) = customer_store(&storage);
    let (_, bob) = customer_store(&storage);
    let order = place_order(&alice, &tee("crew", 2999, None), 1).await;

    let err = orders::get_my_order(&bob, order.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn admin_listing_spans_customers_and_filters_by_status() {
    let storage = memory();
    let (_, alice) = customer_store(&storage);
    let (_, bob) = customer_store(&storage);
    let first = place_order(&alice, &tee("crew", 2999, None), 1).await;
    place_order(&bob, &tee("relaxed", 2799, None), 1).await;
    orders::update_order_status(storage.clone(), TransitionPolicy::Enforce, first.id, OrderStatus::Cancelled)
        .await
        .unwrap();

    let all = orders::list_all_orders(storage.as_ref(), None, true).await.unwrap();
    assert_eq!(all.len(), 2);
    let cancelled = orders::list_all_orders(storage.as_ref(), Some(OrderStatus::Cancelled), true)
        .await
        .unwrap();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].id, first.id);
}

#[tokio::test]
async fn reorder_adds_available_lines_and_reports_the_rest() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let kept = tee("crew", 2999, None);
    let mut sold_out = tee("relaxed", 2799, None);
    let retired = tee("vintage", 1999, None);

    cart::add_to_cart(&store, line(&kept, 2)).await.unwrap();
    cart::add_to_cart(&store, line(&sold_out, 1)).await.unwrap();
    cart::add_to_cart(&store, line(&retired, 1)).await.unwrap();
    let order = orders::create_order(&store, "ada@example.com", shipping(), Decimal::ZERO)
        .await
        .unwrap();

    sold_out.variants = vec![variant(Size::M, "Black", 0)];
    let mut repriced = kept.clone();
    repriced.sale_price = Some(Decimal::new(2499, 2));
    let catalog: HashMap<Uuid, Product> =
        [(repriced.id, repriced.clone()), (sold_out.id, sold_out.clone())]
            .into_iter()
            .collect();

    let outcome = orders::reorder(&store, order.id, &catalog).await.unwrap();

    assert_eq!(outcome.added.len(), 1);
    assert_eq!(outcome.added[0].quantity, 2);
    assert_eq!(outcome.added[0].price, Decimal::new(2499, 2));
    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.message, "Some items could not be added to cart.");
    assert!(
        outcome
            .skipped
            .iter()
            .any(|s| s.product_id == retired.id && s.reason == "product is no longer available")
    );
    assert!(
        outcome
            .skipped
            .iter()
            .any(|s| s.product_id == sold_out.id && s.reason == "out of stock")
    );
    assert_eq!(cart::get_cart(&store).await.unwrap().len(), 1);
}

#[tokio::test]
async fn reorder_of_inactive_products_leaves_cart_untouched() {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);
    let order = place_order(&store, &product, 1).await;

    let mut hidden = product.clone();
    hidden.status = ProductStatus::Inactive;
    let catalog = HashMap::from([(hidden.id, hidden)]);

    let outcome = orders::reorder(&store, order.id, &catalog).await.unwrap();
    assert!(outcome.added.is_empty());
    assert_eq!(outcome.message, "None of the items are available any more.");
    assert!(cart::get_cart(&store).await.unwrap().is_empty());
}

#[test]
fn delivery_fee_is_waived_above_threshold() {
    let settings = DeliverySettings {
        base_fee: Decimal::new(5, 0),
        free_above: Some(Decimal::new(50, 0)),
        delivery_text: String::new(),
    };
    assert_eq!(settings.fee_for(Decimal::new(4999, 2)), Decimal::new(5, 0));
    assert_eq!(settings.fee_for(Decimal::new(50, 0)), Decimal::ZERO);

    let no_waiver = DeliverySettings {
        free_above: None,
        ..settings
    };
    assert_eq!(no_waiver.fee_for(Decimal::new(500, 0)), Decimal::new(5, 0));
}

#[tokio::test]
async fn unknown_order_is_not_found_for_admin_updates() {
    let storage = memory();
    let err = orders::update_order_status(
        Arc::clone(&storage),
        TransitionPolicy::Enforce,
        Uuid::new_v4(),
        OrderStatus::Shipped,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

const ALL_ORDER_STATUSES: [OrderStatus; 8] = [
    OrderStatus::Received,
    OrderStatus::InReview,
    OrderStatus::InPacking,
    OrderStatus::ReadyForDispatch,
    OrderStatus::Shipped,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

#[test]
fn terminal_order_statuses_accept_nothing() {
    for from in [OrderStatus::Delivered, OrderStatus::Cancelled] {
        for to in ALL_ORDER_STATUSES {
            assert!(!from.can_transition_to(to), "{from:?} -> {to:?}");
            assert!(matches!(
                check_order_transition(TransitionPolicy::Enforce, from, to),
                Err(AppError::Conflict(_))
            ));
        }
    }
}

#[test]
fn order_transition_table() {
    use OrderStatus::*;
    let cases = [
        (Received, Received, true),
        (Received, InReview, true),
        (Received, Delivered, true),
        (InReview, Received, false),
        (InPacking, InPacking, true),
        (Shipped, OutForDelivery, true),
        (Shipped, InReview, false),
        (Shipped, Cancelled, true),
        (OutForDelivery, Shipped, false),
        (OutForDelivery, Cancelled, true),
        (Delivered, Delivered, false),
        (Delivered, Cancelled, false),
        (Cancelled, Received, false),
        (Cancelled, Cancelled, false),
    ];
    for (from, to, allowed) in cases {
        assert_eq!(from.can_transition_to(to), allowed, "{from:?} -> {to:?}");
    }
}

#[test]
fn every_open_order_can_be_cancelled() {
    for from in ALL_ORDER_STATUSES.into_iter().filter(|s| !s.is_terminal()) {
        assert!(from.can_transition_to(OrderStatus::Cancelled), "{from:?}");
    }
}

#[test]
fn permissive_policy_overrides_terminal_states() {
    assert!(
        check_order_transition(
            TransitionPolicy::Permissive,
            OrderStatus::Delivered,
            OrderStatus::Received
        )
        .is_ok()
    );
}

#[tokio::test]
async fn failed_order_write_puts_the_cart_back() {
    let failing = Arc::new(FailingWrites::default());
    let storage: Arc<dyn Storage> = failing.clone();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);
    cart::add_to_cart(&store, line(&product, 2)).await.unwrap();

    failing.fail_on(StoreKey::Orders);
    let err = orders::create_order(&store, "ada@example.com", shipping(), Decimal::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
    assert!(orders::list_my_orders(&store).await.unwrap().is_empty());
    let cart_lines = cart::get_cart(&store).await.unwrap();
    assert_eq!(cart_lines.len(), 1);
    assert_eq!(cart_lines[0].quantity, 2);
}

#[tokio::test]
async fn failed_cart_clear_writes_no_order() {
    let failing = Arc::new(FailingWrites::default());
    let storage: Arc<dyn Storage> = failing.clone();
    let (_, store) = customer_store(&storage);
    let product = tee("crew", 2999, None);
    cart::add_to_cart(&store, line(&product, 1)).await.unwrap();

    failing.fail_on(StoreKey::Cart);
    assert!(
        orders::create_order(&store, "ada@example.com", shipping(), Decimal::ZERO)
            .await
            .is_err()
    );
    assert!(orders::list_my_orders(&store).await.unwrap().is_empty());
    assert_eq!(cart::get_cart(&store).await.unwrap().len(), 1);

    failing.fail_on_nothing();
    orders::create_order(&store, "ada@example.com", shipping(), Decimal::ZERO)
        .await
        .unwrap();
    assert_eq!(orders::list_my_orders(&store).await.unwrap().len(), 1);
}
