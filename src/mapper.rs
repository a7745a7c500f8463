//! Conversions between database rows and the camelCase view models.
//!
//! Everything here is pure. Rows with values outside the closed vocabularies
//! (unknown category, size, role...) are reported as internal errors; they
//! can only come from data written outside this service.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    entity::{
        admin_logs, admin_users, collections, faq_items, hero_slides, product_images,
        product_variants, products, store_settings, users,
    },
    error::{AppError, AppResult},
    models::{
        AdminLog, AdminRole, AdminStatus, AdminUser, Category, Collection, DeliverySettings,
        FaqItem, HeroSlide, Product, ProductImage, ProductStatus, ProductVariant, Size,
        StoreSettings, ThemeSettings, User,
    },
};

/// A product row together with its child rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product: products::Model,
    pub images: Vec<product_images::Model>,
    pub variants: Vec<product_variants::Model>,
    pub collection_ids: Vec<Uuid>,
}

fn malformed(what: &str, value: &str) -> AppError {
    AppError::Internal(anyhow::anyhow!("malformed {what} in database: {value:?}"))
}

pub fn map_product(row: ProductRow) -> AppResult<Product> {
    let ProductRow {
        product,
        images,
        variants,
        collection_ids,
    } = row;

    let category =
        Category::parse(&product.category).ok_or_else(|| malformed("category", &product.category))?;
    let status = ProductStatus::parse(&product.status)
        .ok_or_else(|| malformed("product status", &product.status))?;

    let mut images: Vec<ProductImage> = images
        .into_iter()
        .map(|img| ProductImage {
            id: img.id,
            image_url: img.image_url,
            sort_order: img.sort_order,
        })
        .collect();
    images.sort_by_key(|img| img.sort_order);

    let variants = variants
        .into_iter()
        .map(map_variant)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Product {
        id: product.id,
        name: product.name,
        description: product.description,
        base_price: product.base_price,
        sale_price: product.sale_price.filter(|p| !p.is_zero()),
        category,
        collections: collection_ids,
        status,
        is_new: product.is_new,
        is_best_seller: product.is_best_seller,
        images,
        variants,
        created_at: product.created_at.with_timezone(&Utc),
    })
}

fn map_variant(model: product_variants::Model) -> AppResult<ProductVariant> {
    let size = Size::parse(&model.size).ok_or_else(|| malformed("size", &model.size))?;
    Ok(ProductVariant {
        id: model.id,
        size,
        color: model.color,
        stock: model.stock,
    })
}

/// Inverse of [`map_product`], used on the admin write path.
pub fn unmap_product(product: &Product) -> ProductRow {
    ProductRow {
        product: products::Model {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            base_price: product.base_price,
            sale_price: product.sale_price,
            category: product.category.as_str().to_string(),
            status: product.status.as_str().to_string(),
            is_new: product.is_new,
            is_best_seller: product.is_best_seller,
            created_at: product.created_at.into(),
        },
        images: product
            .images
            .iter()
            .map(|img| product_images::Model {
                id: img.id,
                product_id: product.id,
                image_url: img.image_url.clone(),
                sort_order: img.sort_order,
            })
            .collect(),
        variants: product
            .variants
            .iter()
            .map(|v| product_variants::Model {
                id: v.id,
                product_id: product.id,
                size: v.size.as_str().to_string(),
                color: v.color.clone(),
                stock: v.stock,
            })
            .collect(),
        collection_ids: product.collections.clone(),
    }
}

pub fn map_user(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        address: model.address,
        city: model.city,
        postal_code: model.postal_code,
    }
}

pub fn map_admin_user(model: admin_users::Model) -> AppResult<AdminUser> {
    let role = AdminRole::parse(&model.role).ok_or_else(|| malformed("admin role", &model.role))?;
    let status =
        AdminStatus::parse(&model.status).ok_or_else(|| malformed("admin status", &model.status))?;
    Ok(AdminUser {
        id: model.id,
        name: model.name,
        email: model.email,
        role,
        status,
    })
}

pub fn map_collection(model: collections::Model) -> Collection {
    Collection {
        id: model.id,
        name: model.name,
        description: model.description,
        image_url: model.image_url,
        show_on_home: model.show_on_home,
    }
}

pub fn map_hero_slide(model: hero_slides::Model) -> HeroSlide {
    HeroSlide {
        id: model.id,
        image_url: model.image_url,
        title: model.title,
        subtitle: model.subtitle,
        link: model.link,
        is_active: model.is_active,
        sort_order: model.sort_order,
    }
}

pub fn map_admin_log(model: admin_logs::Model) -> AdminLog {
    AdminLog {
        id: model.id,
        admin_id: model.admin_id,
        admin_name: model.admin_name,
        action: model.action,
        details: model.details,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

pub fn map_faq(model: faq_items::Model) -> FaqItem {
    FaqItem {
        id: model.id,
        question: model.question,
        answer: model.answer,
    }
}

pub fn map_store_settings(model: &store_settings::Model) -> StoreSettings {
    StoreSettings {
        store_name: model.store_name.clone(),
        logo_url: model.logo_url.clone(),
        contact_phone: model.contact_phone.clone(),
        address: model.address.clone(),
        currency: model.currency.clone(),
        announcement_bar_text: model.announcement_text.clone(),
        announcement_active: model.announcement_active,
    }
}

pub fn map_delivery_settings(model: &store_settings::Model) -> DeliverySettings {
    DeliverySettings {
        base_fee: model.base_delivery_fee,
        free_above: model.free_delivery_above.filter(|v| *v > Decimal::ZERO),
        delivery_text: model.delivery_text.clone(),
    }
}

pub fn map_theme_settings(model: &store_settings::Model) -> ThemeSettings {
    ThemeSettings {
        primary_color: model.primary_color.clone(),
        font_family: model.font_family.clone(),
    }
}

/// Settings row used until an owner saves one.
pub fn default_settings() -> store_settings::Model {
    store_settings::Model {
        id: 1,
        store_name: "My Store".into(),
        logo_url: String::new(),
        contact_phone: String::new(),
        address: String::new(),
        currency: "USD".into(),
        announcement_text: "Welcome!".into(),
        announcement_active: true,
        base_delivery_fee: Decimal::new(5, 0),
        free_delivery_above: None,
        delivery_text: String::new(),
        primary_color: "#111827".into(),
        font_family: "Inter".into(),
        size_guide_html: String::new(),
        cta_title: "Create Your Own".into(),
        cta_subtitle: "Design a custom t-shirt".into(),
        cta_image_url: String::new(),
        updated_at: Utc::now().into(),
    }
}
