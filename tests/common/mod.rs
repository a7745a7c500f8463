#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use merch_storefront_api::{
    lifecycle::cart::NewCartLine,
    models::{Category, Product, ProductImage, ProductStatus, ProductVariant, Size},
    store::{MemoryStorage, Storage, UserStore},
};

pub fn memory() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::new())
}

pub fn customer_store(storage: &Arc<dyn Storage>) -> (Uuid, UserStore) {
    let user_id = Uuid::new_v4();
    (user_id, UserStore::new(storage.clone(), Some(user_id)))
}

pub fn variant(size: Size, color: &str, stock: i32) -> ProductVariant {
    ProductVariant {
        id: Uuid::new_v4(),
        size,
        color: color.into(),
        stock,
    }
}

/// Active tee priced at `base` cents, with one M/Black variant in stock.
pub fn tee(name: &str, base: i64, sale: Option<i64>) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.into(),
        description: "Cotton tee".into(),
        base_price: Decimal::new(base, 2),
        sale_price: sale.map(|cents| Decimal::new(cents, 2)),
        category: Category::Men,
        collections: Vec::new(),
        status: ProductStatus::Active,
        is_new: false,
        is_best_seller: false,
        images: vec![ProductImage {
            id: Uuid::new_v4(),
            image_url: format!("https://img.test/{name}.jpg"),
            sort_order: 0,
        }],
        variants: vec![variant(Size::M, "Black", 10)],
        created_at: Utc::now(),
    }
}

pub fn line(product: &Product, quantity: i32) -> NewCartLine {
    NewCartLine::from_product(product, &product.variants[0], quantity)
}
