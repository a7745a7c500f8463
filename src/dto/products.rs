use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VariantInput {
    pub size: String,
    pub color: String,
    pub stock: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: Decimal,
    pub sale_price: Option<Decimal>,
    pub category: String,
    #[serde(default)]
    pub collections: Vec<Uuid>,
    pub status: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<VariantInput>,
}

/// Fields left out keep their current value; `images` and `variants`, when
/// present, replace the existing sets.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<Decimal>,
    /// Zero clears the sale price.
    pub sale_price: Option<Decimal>,
    pub category: Option<String>,
    pub collections: Option<Vec<Uuid>>,
    pub status: Option<String>,
    pub is_new: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub images: Option<Vec<String>>,
    pub variants: Option<Vec<VariantInput>>,
}
