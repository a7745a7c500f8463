use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, sea_query::OnConflict};

use crate::{
    access::AdminArea,
    dto::{admin::SizeGuideRequest, content::SizeGuide},
    entity::store_settings::{Column as SettingsCol, Entity as StoreSettingsEntity, Model as SettingsModel},
    error::{AppError, AppResult},
    lifecycle::require_text,
    mapper::{map_delivery_settings, map_store_settings, map_theme_settings},
    middleware::auth::AdminPrincipal,
    models::{DeliverySettings, StoreSettings, ThemeSettings},
    response::ApiResponse,
    services::{
        content_service::{SETTINGS_ROW_ID, load_settings},
        record_admin_action,
    },
    state::AppState,
};

/// Upsert the single settings row.
pub async fn save_settings<C: ConnectionTrait>(conn: &C, mut model: SettingsModel) -> AppResult<()> {
    model.id = SETTINGS_ROW_ID;
    model.updated_at = Utc::now().into();
    let active = model.into_active_model().reset_all();

    StoreSettingsEntity::insert(active)
        .on_conflict(
            OnConflict::column(SettingsCol::Id)
                .update_columns([
                    SettingsCol::StoreName,
                    SettingsCol::LogoUrl,
                    SettingsCol::ContactPhone,
                    SettingsCol::Address,
                    SettingsCol::Currency,
                    SettingsCol::AnnouncementText,
                    SettingsCol::AnnouncementActive,
                    SettingsCol::BaseDeliveryFee,
                    SettingsCol::FreeDeliveryAbove,
                    SettingsCol::DeliveryText,
                    SettingsCol::PrimaryColor,
                    SettingsCol::FontFamily,
                    SettingsCol::SizeGuideHtml,
                    SettingsCol::CtaTitle,
                    SettingsCol::CtaSubtitle,
                    SettingsCol::CtaImageUrl,
                    SettingsCol::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;
    Ok(())
}

pub async fn get_store(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<StoreSettings>> {
    admin.ensure_area(AdminArea::Settings)?;
    let settings = load_settings(&state.orm).await?;
    Ok(ApiResponse::success(map_store_settings(&settings)))
}

pub async fn update_store(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: StoreSettings,
) -> AppResult<ApiResponse<StoreSettings>> {
    admin.ensure_area(AdminArea::Settings)?;
    require_text(&payload.store_name, "store name")?;
    require_text(&payload.currency, "currency")?;

    let mut settings = load_settings(&state.orm).await?;
    settings.store_name = payload.store_name.trim().to_string();
    settings.logo_url = payload.logo_url;
    settings.contact_phone = payload.contact_phone;
    settings.address = payload.address;
    settings.currency = payload.currency.trim().to_uppercase();
    settings.announcement_text = payload.announcement_bar_text;
    settings.announcement_active = payload.announcement_active;
    save_settings(&state.orm, settings.clone()).await?;

    record_admin_action(state, admin, "Updated Store Settings", settings.store_name.clone()).await;

    Ok(ApiResponse::success(map_store_settings(&settings)))
}

pub async fn get_delivery(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<DeliverySettings>> {
    admin.ensure_area(AdminArea::Settings)?;
    let settings = load_settings(&state.orm).await?;
    Ok(ApiResponse::success(map_delivery_settings(&settings)))
}

pub async fn update_delivery(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: DeliverySettings,
) -> AppResult<ApiResponse<DeliverySettings>> {
    admin.ensure_area(AdminArea::Settings)?;
    if payload.base_fee < Decimal::ZERO {
        return Err(AppError::invalid("delivery fee cannot be negative"));
    }
    if payload.free_above.is_some_and(|v| v < Decimal::ZERO) {
        return Err(AppError::invalid("free delivery threshold cannot be negative"));
    }

    let mut settings = load_settings(&state.orm).await?;
    settings.base_delivery_fee = payload.base_fee;
    settings.free_delivery_above = payload.free_above;
    settings.delivery_text = payload.delivery_text;
    save_settings(&state.orm, settings.clone()).await?;

    let delivery = map_delivery_settings(&settings);
    record_admin_action(
        state,
        admin,
        "Updated Delivery Settings",
        format!("Base fee {}", delivery.base_fee),
    )
    .await;

    Ok(ApiResponse::success(delivery))
}

pub async fn get_theme(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<ThemeSettings>> {
    admin.ensure_area(AdminArea::Settings)?;
    let settings = load_settings(&state.orm).await?;
    Ok(ApiResponse::success(map_theme_settings(&settings)))
}

pub async fn update_theme(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: ThemeSettings,
) -> AppResult<ApiResponse<ThemeSettings>> {
    admin.ensure_area(AdminArea::Settings)?;
    require_text(&payload.primary_color, "primary color")?;
    require_text(&payload.font_family, "font family")?;

    let mut settings = load_settings(&state.orm).await?;
    settings.primary_color = payload.primary_color.trim().to_string();
    settings.font_family = payload.font_family.trim().to_string();
    save_settings(&state.orm, settings.clone()).await?;

    record_admin_action(
        state,
        admin,
        "Updated Theme Settings",
        format!("{} / {}", settings.primary_color, settings.font_family),
    )
    .await;

    Ok(ApiResponse::success(map_theme_settings(&settings)))
}

pub async fn update_size_guide(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: SizeGuideRequest,
) -> AppResult<ApiResponse<SizeGuide>> {
    admin.ensure_area(AdminArea::Settings)?;
    let mut settings = load_settings(&state.orm).await?;
    settings.size_guide_html = payload.html_content;
    save_settings(&state.orm, settings.clone()).await?;

    record_admin_action(state, admin, "Updated Size Guide", "Size guide content replaced").await;

    Ok(ApiResponse::success(SizeGuide {
        html_content: settings.size_guide_html,
    }))
}
