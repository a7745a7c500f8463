use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ShippingInfo;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShippingInput {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl From<ShippingInput> for ShippingInfo {
    fn from(input: ShippingInput) -> Self {
        ShippingInfo {
            name: input.name,
            phone: input.phone,
            address: input.address,
            city: input.city,
            postal_code: input.postal_code,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub shipping: ShippingInput,
    /// Only `COD` is accepted.
    pub payment_method: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: Uuid,
    pub order_number: String,
    pub total_amount: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddNoteRequest {
    pub note: String,
}
