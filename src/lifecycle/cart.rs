use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CartItem, Product, ProductVariant},
    store::{StoreKey, UserStore},
};

/// A line about to enter the cart, already resolved against the catalog.
#[derive(Debug, Clone)]
pub struct NewCartLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_image: String,
    pub variant: ProductVariant,
    pub quantity: i32,
    pub price: Decimal,
}

impl NewCartLine {
    /// Captures the price the customer would pay right now.
    pub fn from_product(product: &Product, variant: &ProductVariant, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            product_image: product.primary_image(),
            variant: variant.clone(),
            quantity,
            price: product.effective_price(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub count: i64,
    pub subtotal: Decimal,
}

impl CartSummary {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let count = items.iter().map(|i| i64::from(i.quantity)).sum();
        let subtotal = items.iter().map(CartItem::line_total).sum();
        Self {
            items,
            count,
            subtotal,
        }
    }
}

pub async fn get_cart(store: &UserStore) -> AppResult<Vec<CartItem>> {
    store.get(StoreKey::Cart, Vec::new()).await
}

pub async fn cart_summary(store: &UserStore) -> AppResult<CartSummary> {
    Ok(CartSummary::from_items(get_cart(store).await?))
}

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: i32 = 999;

fn check_quantity(quantity: i32) -> AppResult<()> {
    if !(1..=MAX_LINE_QUANTITY).contains(&quantity) {
        return Err(AppError::invalid(format!(
            "quantity must be between 1 and {MAX_LINE_QUANTITY}"
        )));
    }
    Ok(())
}

/// Merge `line` into `cart`; an existing line for the same product variant
/// keeps its captured price and grows by the new quantity. The cart is left
/// untouched when the merged quantity would exceed [`MAX_LINE_QUANTITY`].
pub(crate) fn merge_line(cart: &mut Vec<CartItem>, line: NewCartLine) -> AppResult<CartItem> {
    check_quantity(line.quantity)?;
    if let Some(existing) = cart
        .iter_mut()
        .find(|item| item.product_id == line.product_id && item.variant.id == line.variant.id)
    {
        let quantity = existing
            .quantity
            .checked_add(line.quantity)
            .filter(|q| *q <= MAX_LINE_QUANTITY)
            .ok_or_else(|| {
                AppError::invalid(format!(
                    "a cart line cannot hold more than {MAX_LINE_QUANTITY} items"
                ))
            })?;
        existing.quantity = quantity;
        return Ok(existing.clone());
    }

    let item = CartItem {
        id: Uuid::new_v4(),
        product_id: line.product_id,
        product_name: line.product_name,
        product_image: line.product_image,
        variant: line.variant,
        quantity: line.quantity,
        price: line.price,
    };
    cart.push(item.clone());
    Ok(item)
}

pub async fn add_to_cart(store: &UserStore, line: NewCartLine) -> AppResult<CartItem> {
    store.require_user()?;
    let mut cart = get_cart(store).await?;
    let item = merge_line(&mut cart, line)?;
    store.set(StoreKey::Cart, &cart).await?;
    Ok(item)
}

pub async fn update_cart_item(store: &UserStore, item_id: Uuid, quantity: i32) -> AppResult<CartItem> {
    store.require_user()?;
    check_quantity(quantity)?;

    let mut cart = get_cart(store).await?;
    let item = cart
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or(AppError::NotFound)?;
    item.quantity = quantity;
    let updated = item.clone();
    store.set(StoreKey::Cart, &cart).await?;
    Ok(updated)
}

pub async fn remove_cart_item(store: &UserStore, item_id: Uuid) -> AppResult<()> {
    store.require_user()?;
    let mut cart = get_cart(store).await?;
    let before = cart.len();
    cart.retain(|item| item.id != item_id);
    if cart.len() == before {
        return Err(AppError::NotFound);
    }
    store.set(StoreKey::Cart, &cart).await
}

pub async fn clear_cart(store: &UserStore) -> AppResult<()> {
    store.set(StoreKey::Cart, &Vec::<CartItem>::new()).await
}
