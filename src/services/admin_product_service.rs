use std::collections::HashSet;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::products::{CreateProductRequest, UpdateProductRequest, VariantInput},
    entity::{
        collections::{Column as CollectionCol, Entity as Collections},
        product_collections::{
            ActiveModel as ProductCollectionActive, Column as ProdCollCol,
            Entity as ProductCollections,
        },
        product_images::{ActiveModel as ImageActive, Column as ImageCol, Entity as ProductImages},
        product_variants::{
            ActiveModel as VariantActive, Column as VariantCol, Entity as ProductVariants,
        },
        products::{ActiveModel as ProductActive, Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    mapper::{ProductRow, unmap_product},
    middleware::auth::AdminPrincipal,
    models::{Category, Product, ProductImage, ProductStatus, ProductVariant, Size},
    response::{Ack, ApiResponse, Meta},
    routes::params::AdminProductQuery,
    services::{
        product_service::{find_product, hydrate, search_condition},
        record_admin_action,
    },
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    admin: &AdminPrincipal,
    query: AdminProductQuery,
) -> AppResult<ApiResponse<Vec<Product>>> {
    admin.ensure_area(AdminArea::Products)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(raw) = query.status.as_deref().filter(|s| !s.is_empty()) {
        let status = parse_status(raw)?;
        condition = condition.add(ProdCol::Status.eq(status.as_str()));
    }
    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        condition = condition.add(search_condition(search));
    }

    let finder = Products::find()
        .filter(condition)
        .order_by_desc(ProdCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;
    let models = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::paginated(
        hydrate(&state.orm, models).await?,
        Meta::new(page, limit, total),
    ))
}

pub async fn get_product(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<Product>> {
    admin.ensure_area(AdminArea::Products)?;
    let product = find_product(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(product))
}

pub async fn create_product(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    admin.ensure_area(AdminArea::Products)?;

    let id = Uuid::new_v4();
    let product = Product {
        id,
        name: payload.name.trim().to_string(),
        description: payload.description.trim().to_string(),
        base_price: payload.base_price,
        sale_price: payload.sale_price.filter(|p| !p.is_zero()),
        category: parse_category(&payload.category)?,
        collections: dedup(payload.collections),
        status: match payload.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => ProductStatus::Active,
        },
        is_new: payload.is_new,
        is_best_seller: payload.is_best_seller,
        images: build_images(payload.images),
        variants: build_variants(payload.variants)?,
        created_at: Utc::now(),
    };
    validate_product(&product)?;
    ensure_collections_exist(state, &product.collections).await?;

    let txn = state.orm.begin().await?;
    let row = unmap_product(&product);
    insert_product_row(&txn, &row).await?;
    insert_children(&txn, &row).await?;
    txn.commit().await?;

    record_admin_action(
        state,
        admin,
        "Created Product",
        format!("Product {} ({})", product.name, product.id),
    )
    .await;

    Ok(ApiResponse::success(product))
}

pub async fn update_product(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    admin.ensure_area(AdminArea::Products)?;
    let mut product = find_product(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Some(name) = payload.name {
        product.name = name.trim().to_string();
    }
    if let Some(description) = payload.description {
        product.description = description.trim().to_string();
    }
    if let Some(base_price) = payload.base_price {
        product.base_price = base_price;
    }
    if let Some(sale_price) = payload.sale_price {
        product.sale_price = Some(sale_price).filter(|p| !p.is_zero());
    }
    if let Some(category) = payload.category {
        product.category = parse_category(&category)?;
    }
    if let Some(collections) = payload.collections {
        product.collections = dedup(collections);
    }
    if let Some(status) = payload.status {
        product.status = parse_status(&status)?;
    }
    if let Some(is_new) = payload.is_new {
        product.is_new = is_new;
    }
    if let Some(is_best_seller) = payload.is_best_seller {
        product.is_best_seller = is_best_seller;
    }
    if let Some(images) = payload.images {
        product.images = build_images(images);
    }
    if let Some(variants) = payload.variants {
        product.variants = build_variants(variants)?;
    }
    validate_product(&product)?;
    ensure_collections_exist(state, &product.collections).await?;

    let row = unmap_product(&product);
    let txn = state.orm.begin().await?;
    let p = &row.product;
    ProductActive {
        id: Set(p.id),
        name: Set(p.name.clone()),
        description: Set(p.description.clone()),
        base_price: Set(p.base_price),
        sale_price: Set(p.sale_price),
        category: Set(p.category.clone()),
        status: Set(p.status.clone()),
        is_new: Set(p.is_new),
        is_best_seller: Set(p.is_best_seller),
        created_at: Set(p.created_at),
    }
    .update(&txn)
    .await?;

    // images, variants and collection links are replaced wholesale
    ProductImages::delete_many()
        .filter(ImageCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    ProductVariants::delete_many()
        .filter(VariantCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    ProductCollections::delete_many()
        .filter(ProdCollCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    insert_children(&txn, &row).await?;
    txn.commit().await?;

    record_admin_action(
        state,
        admin,
        "Updated Product",
        format!("Product {} ({})", product.name, product.id),
    )
    .await;

    Ok(ApiResponse::success(product))
}

/// Owner only.
pub async fn delete_product(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<Ack>> {
    admin.ensure_area(AdminArea::Products)?;
    if !admin.role.can_delete_products() {
        return Err(AppError::Forbidden);
    }

    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    record_admin_action(state, admin, "Deleted Product", format!("Product {id}")).await;

    Ok(ApiResponse::success(Ack::ok()))
}

fn parse_category(raw: &str) -> AppResult<Category> {
    Category::parse(raw.trim()).ok_or_else(|| AppError::invalid(format!("unknown category {raw:?}")))
}

fn parse_status(raw: &str) -> AppResult<ProductStatus> {
    ProductStatus::parse(raw.trim())
        .ok_or_else(|| AppError::invalid(format!("unknown product status {raw:?}")))
}

fn dedup(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn build_images(urls: Vec<String>) -> Vec<ProductImage> {
    urls.into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .enumerate()
        .map(|(idx, image_url)| ProductImage {
            id: Uuid::new_v4(),
            image_url,
            sort_order: idx as i32,
        })
        .collect()
}

fn build_variants(inputs: Vec<VariantInput>) -> AppResult<Vec<ProductVariant>> {
    let mut seen = HashSet::new();
    let mut variants = Vec::with_capacity(inputs.len());
    for input in inputs {
        let size = Size::parse(&input.size)
            .ok_or_else(|| AppError::invalid(format!("unknown size {:?}", input.size)))?;
        let color = input.color.trim().to_string();
        if color.is_empty() {
            return Err(AppError::invalid("variant color is required"));
        }
        if input.stock < 0 {
            return Err(AppError::invalid("variant stock cannot be negative"));
        }
        if !seen.insert((size, color.to_lowercase())) {
            return Err(AppError::invalid(format!(
                "duplicate variant {} / {color}",
                size.as_str()
            )));
        }
        variants.push(ProductVariant {
            id: Uuid::new_v4(),
            size,
            color,
            stock: input.stock,
        });
    }
    Ok(variants)
}

fn validate_product(product: &Product) -> AppResult<()> {
    if product.name.is_empty() {
        return Err(AppError::invalid("name is required"));
    }
    if product.base_price < Decimal::ZERO {
        return Err(AppError::invalid("base price cannot be negative"));
    }
    if let Some(sale) = product.sale_price {
        if sale < Decimal::ZERO {
            return Err(AppError::invalid("sale price cannot be negative"));
        }
    }
    Ok(())
}

async fn ensure_collections_exist(state: &AppState, ids: &[Uuid]) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let found = Collections::find()
        .filter(CollectionCol::Id.is_in(ids.to_vec()))
        .count(&state.orm)
        .await?;
    if found as usize != ids.len() {
        return Err(AppError::invalid("unknown collection"));
    }
    Ok(())
}

async fn insert_product_row(txn: &DatabaseTransaction, row: &ProductRow) -> AppResult<()> {
    let p = &row.product;
    ProductActive {
        id: Set(p.id),
        name: Set(p.name.clone()),
        description: Set(p.description.clone()),
        base_price: Set(p.base_price),
        sale_price: Set(p.sale_price),
        category: Set(p.category.clone()),
        status: Set(p.status.clone()),
        is_new: Set(p.is_new),
        is_best_seller: Set(p.is_best_seller),
        created_at: Set(p.created_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_children(txn: &DatabaseTransaction, row: &ProductRow) -> AppResult<()> {
    if !row.images.is_empty() {
        ProductImages::insert_many(row.images.iter().map(|img| ImageActive {
            id: Set(img.id),
            product_id: Set(img.product_id),
            image_url: Set(img.image_url.clone()),
            sort_order: Set(img.sort_order),
        }))
        .exec(txn)
        .await?;
    }
    if !row.variants.is_empty() {
        ProductVariants::insert_many(row.variants.iter().map(|v| VariantActive {
            id: Set(v.id),
            product_id: Set(v.product_id),
            size: Set(v.size.clone()),
            color: Set(v.color.clone()),
            stock: Set(v.stock),
        }))
        .exec(txn)
        .await?;
    }
    if !row.collection_ids.is_empty() {
        ProductCollections::insert_many(row.collection_ids.iter().map(|collection_id| {
            ProductCollectionActive {
                product_id: Set(row.product.id),
                collection_id: Set(*collection_id),
            }
        }))
        .exec(txn)
        .await?;
    }
    Ok(())
}
