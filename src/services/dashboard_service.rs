use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    access::AdminArea,
    dto::admin::{ChartPoint, DashboardData},
    error::AppResult,
    lifecycle::{orders, requests},
    middleware::auth::AdminPrincipal,
    models::{CustomRequest, Order},
    response::ApiResponse,
    state::AppState,
    status::{OrderStatus, RequestStatus},
};

const CHART_DAYS: i64 = 7;
const RECENT_LIMIT: usize = 5;

fn sales_on(orders: &[Order], day: NaiveDate) -> (Decimal, i64) {
    orders
        .iter()
        .filter(|o| o.order_status != OrderStatus::Cancelled)
        .filter(|o| o.created_at.date_naive() == day)
        .fold((Decimal::ZERO, 0), |(sum, count), o| {
            (sum + o.total_amount, count + 1)
        })
}

/// Dashboard figures as of `now`. Both inputs are expected newest first.
pub fn build_dashboard(
    orders: Vec<Order>,
    requests: Vec<CustomRequest>,
    now: DateTime<Utc>,
) -> DashboardData {
    let today = now.date_naive();
    let (today_sales, orders_today) = sales_on(&orders, today);
    let pending_custom_requests = requests
        .iter()
        .filter(|r| r.status == RequestStatus::New)
        .count() as i64;

    let chart_data = (0..CHART_DAYS)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            ChartPoint {
                name: day.format("%a").to_string(),
                sales: sales_on(&orders, day).0,
            }
        })
        .collect();

    DashboardData {
        today_sales,
        orders_today,
        pending_custom_requests,
        chart_data,
        recent_orders: orders.into_iter().take(RECENT_LIMIT).collect(),
        recent_custom_requests: requests.into_iter().take(RECENT_LIMIT).collect(),
    }
}

pub async fn dashboard(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<DashboardData>> {
    admin.ensure_area(AdminArea::Dashboard)?;
    let orders = orders::list_all_orders(state.store.as_ref(), None, true).await?;
    let requests = requests::list_all_requests(state.store.as_ref(), None).await?;
    Ok(ApiResponse::success(build_dashboard(orders, requests, Utc::now())))
}
