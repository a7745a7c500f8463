use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use uuid::Uuid;

use crate::{
    entity::{
        product_collections::{Column as ProdCollCol, Entity as ProductCollections},
        product_images::{Column as ImageCol, Entity as ProductImages},
        product_variants::{Column as VariantCol, Entity as ProductVariants},
        products::{Column as ProdCol, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    mapper::{ProductRow, map_product},
    models::{Category, Product, ProductStatus},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSort},
    state::AppState,
};

const RELATED_LIMIT: u64 = 4;
const BEST_SELLER_LIMIT: u64 = 8;

/// Load child rows for `models` and map them, keeping the input order.
pub async fn hydrate<C: ConnectionTrait>(
    conn: &C,
    models: Vec<ProductModel>,
) -> AppResult<Vec<Product>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

    let mut images: HashMap<Uuid, Vec<_>> = HashMap::new();
    for image in ProductImages::find()
        .filter(ImageCol::ProductId.is_in(ids.clone()))
        .all(conn)
        .await?
    {
        images.entry(image.product_id).or_default().push(image);
    }

    let mut variants: HashMap<Uuid, Vec<_>> = HashMap::new();
    for variant in ProductVariants::find()
        .filter(VariantCol::ProductId.is_in(ids.clone()))
        .all(conn)
        .await?
    {
        variants.entry(variant.product_id).or_default().push(variant);
    }

    let mut collections: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in ProductCollections::find()
        .filter(ProdCollCol::ProductId.is_in(ids))
        .all(conn)
        .await?
    {
        collections
            .entry(link.product_id)
            .or_default()
            .push(link.collection_id);
    }

    models
        .into_iter()
        .map(|product| {
            let id = product.id;
            map_product(ProductRow {
                product,
                images: images.remove(&id).unwrap_or_default(),
                variants: variants.remove(&id).unwrap_or_default(),
                collection_ids: collections.remove(&id).unwrap_or_default(),
            })
        })
        .collect()
}

/// Any product by id, whatever its status.
pub async fn find_product<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<Product>> {
    let Some(model) = Products::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };
    Ok(hydrate(conn, vec![model]).await?.pop())
}

/// Current state of the given products, keyed by id. Missing ids are absent.
pub async fn load_catalog(state: &AppState, ids: Vec<Uuid>) -> AppResult<HashMap<Uuid, Product>> {
    let models = Products::find()
        .filter(ProdCol::Id.is_in(ids))
        .all(&state.orm)
        .await?;
    Ok(hydrate(&state.orm, models)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect())
}

/// Products in the order `ids` lists them, skipping ones that are gone or hidden.
pub async fn products_in_order(state: &AppState, ids: &[Uuid]) -> AppResult<Vec<Product>> {
    let mut catalog = load_catalog(state, ids.to_vec()).await?;
    Ok(ids
        .iter()
        .filter_map(|id| catalog.remove(id))
        .filter(|p| p.status == ProductStatus::Active)
        .collect())
}

/// Case-insensitive match on name or description.
pub(crate) fn search_condition(search: &str) -> Condition {
    let pattern = format!("%{}%", search.trim().to_lowercase());
    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(ProdCol::Name))).like(pattern.clone()))
        .add(Expr::expr(Func::lower(Expr::col(ProdCol::Description))).like(pattern))
}

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all().add(ProdCol::Status.eq(ProductStatus::Active.as_str()));
    if let Some(raw) = query.category.as_deref().filter(|c| !c.is_empty()) {
        let category =
            Category::parse(raw).ok_or_else(|| AppError::invalid(format!("unknown category {raw:?}")))?;
        condition = condition.add(ProdCol::Category.eq(category.as_str()));
    }
    if let Some(collection_id) = query.collection {
        let member_ids: Vec<Uuid> = ProductCollections::find()
            .filter(ProdCollCol::CollectionId.eq(collection_id))
            .all(&state.orm)
            .await?
            .into_iter()
            .map(|link| link.product_id)
            .collect();
        condition = condition.add(ProdCol::Id.is_in(member_ids));
    }
    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        condition = condition.add(search_condition(search));
    }

    let mut finder = Products::find().filter(condition);
    finder = match query.sort.unwrap_or(ProductSort::Newest) {
        ProductSort::Newest => finder.order_by_desc(ProdCol::CreatedAt),
        ProductSort::PriceAsc => finder.order_by(effective_price_expr(), Order::Asc),
        ProductSort::PriceDesc => finder.order_by(effective_price_expr(), Order::Desc),
        ProductSort::BestSeller => finder
            .order_by_desc(ProdCol::IsBestSeller)
            .order_by_desc(ProdCol::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;
    let models = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;
    let items = hydrate(&state.orm, models).await?;

    Ok(ApiResponse::paginated(items, Meta::new(page, limit, total)))
}

fn effective_price_expr() -> sea_orm::sea_query::SimpleExpr {
    Expr::cust("COALESCE(NULLIF(sale_price, 0), base_price)")
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = find_product(&state.orm, id)
        .await?
        .filter(|p| p.status == ProductStatus::Active)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(product))
}

/// Same category, excluding the product itself.
pub async fn related_products(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Vec<Product>>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let models = Products::find()
        .filter(ProdCol::Category.eq(product.category))
        .filter(ProdCol::Status.eq(ProductStatus::Active.as_str()))
        .filter(ProdCol::Id.ne(id))
        .order_by_desc(ProdCol::CreatedAt)
        .limit(RELATED_LIMIT)
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(hydrate(&state.orm, models).await?))
}

pub async fn best_sellers(state: &AppState) -> AppResult<ApiResponse<Vec<Product>>> {
    let models = Products::find()
        .filter(ProdCol::IsBestSeller.eq(true))
        .filter(ProdCol::Status.eq(ProductStatus::Active.as_str()))
        .order_by_desc(ProdCol::CreatedAt)
        .limit(BEST_SELLER_LIMIT)
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(hydrate(&state.orm, models).await?))
}
