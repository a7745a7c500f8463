mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use common::{customer_store, line, memory, tee};
use merch_storefront_api::{
    entity::users,
    lifecycle::{
        cart, orders,
        requests::{self, NewRequest},
    },
    models::{CustomRequest, Order, Placement, ShippingInfo},
    services::{customer_service::summarize_customer, dashboard_service::build_dashboard},
    status::{OrderStatus, RequestStatus},
};

fn now() -> DateTime<Utc> {
    // a Wednesday
    Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
}

async fn order_totalling(cents: i64) -> Order {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    cart::add_to_cart(&store, line(&tee("crew", cents, None), 1))
        .await
        .unwrap();
    let shipping = ShippingInfo {
        name: "Ada".into(),
        phone: "0123".into(),
        address: "1 Way".into(),
        city: "London".into(),
        postal_code: "N1".into(),
    };
    orders::create_order(&store, "ada@example.com", shipping, Decimal::ZERO)
        .await
        .unwrap()
}

async fn request_with(status: RequestStatus) -> CustomRequest {
    let storage = memory();
    let (_, store) = customer_store(&storage);
    let mut request = requests::submit_request(
        &store,
        NewRequest {
            customer_name: "Ada".into(),
            color: "Black".into(),
            size: "M".into(),
            placement: Placement::Back,
            description: "Band logo".into(),
            image_url: None,
        },
    )
    .await
    .unwrap();
    request.status = status;
    request
}

#[tokio::test]
async fn todays_sales_skip_cancelled_orders() {
    let mut paid = order_totalling(4000).await;
    paid.created_at = now() - Duration::hours(2);
    let mut cancelled = order_totalling(9900).await;
    cancelled.created_at = now() - Duration::hours(1);
    cancelled.order_status = OrderStatus::Cancelled;
    let mut yesterday = order_totalling(2500).await;
    yesterday.created_at = now() - Duration::days(1);

    let data = build_dashboard(vec![cancelled, paid, yesterday], Vec::new(), now());

    assert_eq!(data.today_sales, Decimal::new(4000, 2));
    assert_eq!(data.orders_today, 1);
    assert_eq!(data.chart_data.len(), 7);
    assert_eq!(data.chart_data[6].name, "Wed");
    assert_eq!(data.chart_data[6].sales, Decimal::new(4000, 2));
    assert_eq!(data.chart_data[5].name, "Tue");
    assert_eq!(data.chart_data[5].sales, Decimal::new(2500, 2));
    assert_eq!(data.chart_data[0].name, "Thu");
    assert_eq!(data.chart_data[0].sales, Decimal::ZERO);
}

#[tokio::test]
async fn pending_requests_and_recent_lists() {
    let mut all_orders = Vec::new();
    for _ in 0..7 {
        all_orders.push(order_totalling(1000).await);
    }
    let requests = vec![
        request_with(RequestStatus::New).await,
        request_with(RequestStatus::New).await,
        request_with(RequestStatus::PreviewSent).await,
    ];

    let data = build_dashboard(all_orders.clone(), requests, now());

    assert_eq!(data.pending_custom_requests, 2);
    assert_eq!(data.recent_orders.len(), 5);
    assert_eq!(data.recent_orders[0].id, all_orders[0].id);
    assert_eq!(data.recent_custom_requests.len(), 3);
}

#[tokio::test]
async fn customer_summary_excludes_cancelled_spend() {
    let user = users::Model {
        id: uuid::Uuid::new_v4(),
        email: "ada@example.com".into(),
        password_hash: String::new(),
        name: "Ada".into(),
        address: None,
        city: None,
        postal_code: None,
        created_at: now().into(),
    };
    let mut first = order_totalling(3000).await;
    first.created_at = now() - Duration::days(3);
    let mut latest = order_totalling(1500).await;
    latest.created_at = now();
    let mut cancelled = order_totalling(8000).await;
    cancelled.created_at = now() - Duration::days(1);
    cancelled.order_status = OrderStatus::Cancelled;

    let summary = summarize_customer(&user, &[latest, cancelled, first]);

    assert_eq!(summary.orders_count, 3);
    assert_eq!(summary.total_spent, Decimal::new(4500, 2));
    assert_eq!(summary.last_order_date, Some(now()));
    assert_eq!(summary.email, "ada@example.com");
}

#[test]
fn customer_without_orders_has_no_last_order() {
    let user = users::Model {
        id: uuid::Uuid::new_v4(),
        email: "new@example.com".into(),
        password_hash: String::new(),
        name: "New".into(),
        address: None,
        city: None,
        postal_code: None,
        created_at: now().into(),
    };
    let summary = summarize_customer(&user, &[]);
    assert_eq!(summary.orders_count, 0);
    assert_eq!(summary.total_spent, Decimal::ZERO);
    assert!(summary.last_order_date.is_none());
}
