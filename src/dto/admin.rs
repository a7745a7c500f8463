use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CustomRequest, Customer, CustomerNote, Order};

#[derive(Debug, Serialize, ToSchema)]
pub struct ChartPoint {
    pub name: String,
    pub sales: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub today_sales: Decimal,
    pub orders_today: i64,
    pub pending_custom_requests: i64,
    pub chart_data: Vec<ChartPoint>,
    pub recent_orders: Vec<Order>,
    pub recent_custom_requests: Vec<CustomRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    pub orders: Vec<Order>,
    pub notes: Vec<CustomerNote>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CollectionInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub show_on_home: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnnouncementRequest {
    pub text: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HeroSlideInput {
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub link: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdminUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAdminUserRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SizeGuideRequest {
    pub html_content: String,
}
