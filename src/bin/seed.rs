use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use merch_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        admin_users::{ActiveModel as AdminActive, Column as AdminCol, Entity as AdminUsers},
        collections::{ActiveModel as CollectionActive, Column as CollectionCol, Entity as Collections},
        faq_items::{ActiveModel as FaqActive, Entity as FaqItems},
        hero_slides::{ActiveModel as SlideActive, Entity as HeroSlides},
        product_collections::ActiveModel as ProductCollectionActive,
        product_images::ActiveModel as ImageActive,
        product_variants::ActiveModel as VariantActive,
        products::{ActiveModel as ProductActive, Column as ProdCol, Entity as Products},
        users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    },
    mapper::default_settings,
    models::{AdminRole, AdminStatus},
    services::{auth_service::hash_password, settings_service::save_settings},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm, &config.migrations_dir).await?;

    let owner_id = ensure_admin(&orm, "Store Owner", "owner@example.com", AdminRole::Owner).await?;
    ensure_admin(&orm, "Store Staff", "staff@example.com", AdminRole::Staff).await?;
    ensure_admin(&orm, "Designer", "designer@example.com", AdminRole::Designer).await?;
    let customer_id = ensure_customer(&orm, "Sample Customer", "customer@example.com").await?;

    let collection_id = ensure_collection(&orm, "Summer Drop", "Light tees for warm days").await?;
    seed_products(&orm, collection_id).await?;
    seed_content(&orm).await?;

    let mut settings = default_settings();
    settings.store_name = "Merch Store".into();
    settings.size_guide_html =
        "<table><tr><th>Size</th><th>Chest (cm)</th></tr><tr><td>M</td><td>96-101</td></tr></table>"
            .into();
    save_settings(&orm, settings).await?;

    tracing::info!(%owner_id, %customer_id, "seed completed");
    Ok(())
}

const SEED_PASSWORD: &str = "password123";

async fn ensure_admin(
    orm: &DatabaseConnection,
    name: &str,
    email: &str,
    role: AdminRole,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = AdminUsers::find()
        .filter(AdminCol::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let admin = AdminActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        email: Set(email.into()),
        password_hash: Set(hash_password(SEED_PASSWORD)?),
        role: Set(role.as_str().into()),
        status: Set(AdminStatus::Active.as_str().into()),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    tracing::info!(email, role = role.as_str(), "seeded admin");
    Ok(admin.id)
}

async fn ensure_customer(orm: &DatabaseConnection, name: &str, email: &str) -> anyhow::Result<Uuid> {
    if let Some(existing) = Users::find()
        .filter(UserCol::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.into()),
        password_hash: Set(hash_password(SEED_PASSWORD)?),
        name: Set(name.into()),
        address: Set(None),
        city: Set(None),
        postal_code: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    tracing::info!(email, "seeded customer");
    Ok(user.id)
}

async fn ensure_collection(
    orm: &DatabaseConnection,
    name: &str,
    description: &str,
) -> anyhow::Result<Uuid> {
    if let Some(existing) = Collections::find()
        .filter(CollectionCol::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(existing.id);
    }

    let collection = CollectionActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        description: Set(description.into()),
        image_url: Set("https://images.example.com/collections/summer.jpg".into()),
        show_on_home: Set(true),
        created_at: Set(Utc::now().into()),
    }
    .insert(orm)
    .await?;
    Ok(collection.id)
}

async fn seed_products(orm: &DatabaseConnection, collection_id: Uuid) -> anyhow::Result<()> {
    // (name, description, category, base price in cents, sale price in cents, best seller)
    let products = [
        ("Classic Crew Tee", "Heavyweight cotton tee", "Men", 2999, None, true),
        ("Relaxed Fit Tee", "Boxy cut with dropped shoulders", "Women", 2799, Some(2299), false),
        ("Little Logo Tee", "Soft tee for kids", "Children", 1599, None, true),
        ("Oversized Graphic Tee", "Front and back print", "Men", 3499, Some(2999), false),
    ];
    let colors = ["Black", "White"];
    let sizes = ["S", "M", "L", "XL"];

    for (name, description, category, base, sale, best_seller) in products {
        let exists = Products::find()
            .filter(ProdCol::Name.eq(name))
            .count(orm)
            .await?;
        if exists > 0 {
            continue;
        }

        let product = ProductActive {
            id: Set(Uuid::new_v4()),
            name: Set(name.into()),
            description: Set(description.into()),
            base_price: Set(Decimal::new(base, 2)),
            sale_price: Set(sale.map(|cents| Decimal::new(cents, 2))),
            category: Set(category.into()),
            status: Set("active".into()),
            is_new: Set(!best_seller),
            is_best_seller: Set(best_seller),
            created_at: Set(Utc::now().into()),
        }
        .insert(orm)
        .await?;

        ImageActive {
            id: Set(Uuid::new_v4()),
            product_id: Set(product.id),
            image_url: Set(format!(
                "https://images.example.com/products/{}.jpg",
                name.to_lowercase().replace(' ', "-")
            )),
            sort_order: Set(0),
        }
        .insert(orm)
        .await?;

        for color in colors {
            for size in sizes {
                VariantActive {
                    id: Set(Uuid::new_v4()),
                    product_id: Set(product.id),
                    size: Set(size.into()),
                    color: Set(color.into()),
                    stock: Set(25),
                }
                .insert(orm)
                .await?;
            }
        }

        ProductCollectionActive {
            product_id: Set(product.id),
            collection_id: Set(collection_id),
        }
        .insert(orm)
        .await?;

        tracing::info!(name, "seeded product");
    }
    Ok(())
}

async fn seed_content(orm: &DatabaseConnection) -> anyhow::Result<()> {
    if HeroSlides::find().count(orm).await? == 0 {
        SlideActive {
            id: Set(Uuid::new_v4()),
            image_url: Set("https://images.example.com/hero/summer.jpg".into()),
            title: Set("Summer Drop".into()),
            subtitle: Set("New tees are in".into()),
            link: Set("/shop".into()),
            is_active: Set(true),
            sort_order: Set(0),
        }
        .insert(orm)
        .await?;
    }

    if FaqItems::find().count(orm).await? == 0 {
        let faq = [
            ("How long does delivery take?", "Orders usually arrive within 3 to 5 working days."),
            ("How do I pay?", "We accept cash on delivery."),
            ("Can I design my own shirt?", "Yes, send a custom request and our designer will prepare a preview."),
        ];
        for (index, (question, answer)) in faq.into_iter().enumerate() {
            FaqActive {
                id: Set(Uuid::new_v4()),
                question: Set(question.into()),
                answer: Set(answer.into()),
                sort_order: Set(index as i32),
            }
            .insert(orm)
            .await?;
        }
    }
    Ok(())
}
