use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::content::{ContactRequest, CustomCta, HomeContent, MessageResponse, SizeGuide},
    entity::{
        contact_messages::ActiveModel as ContactActive,
        faq_items::{Column as FaqCol, Entity as FaqItems},
        hero_slides::{Column as SlideCol, Entity as HeroSlides},
        store_settings::{Entity as StoreSettings, Model as SettingsModel},
    },
    error::{AppError, AppResult},
    lifecycle::require_text,
    mapper::{default_settings, map_faq, map_hero_slide},
    models::FaqItem,
    response::ApiResponse,
    state::AppState,
};

pub const SETTINGS_ROW_ID: i32 = 1;

/// The settings row, or defaults when none has been saved yet.
pub async fn load_settings<C: ConnectionTrait>(conn: &C) -> AppResult<SettingsModel> {
    Ok(StoreSettings::find_by_id(SETTINGS_ROW_ID)
        .one(conn)
        .await?
        .unwrap_or_else(default_settings))
}

pub async fn home_content(state: &AppState) -> AppResult<ApiResponse<HomeContent>> {
    let settings = load_settings(&state.orm).await?;
    let hero_slides = HeroSlides::find()
        .filter(SlideCol::IsActive.eq(true))
        .order_by_asc(SlideCol::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(map_hero_slide)
        .collect();

    let announcement_bar_text = Some(settings.announcement_text)
        .filter(|text| settings.announcement_active && !text.trim().is_empty());

    Ok(ApiResponse::success(HomeContent {
        announcement_bar_text,
        hero_slides,
        custom_cta: CustomCta {
            title: settings.cta_title,
            subtitle: settings.cta_subtitle,
            image_url: settings.cta_image_url,
        },
    }))
}

pub async fn faq(state: &AppState) -> AppResult<ApiResponse<Vec<FaqItem>>> {
    let items = FaqItems::find()
        .order_by_asc(FaqCol::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(map_faq)
        .collect();
    Ok(ApiResponse::success(items))
}

pub async fn size_guide(state: &AppState) -> AppResult<ApiResponse<SizeGuide>> {
    let settings = load_settings(&state.orm).await?;
    Ok(ApiResponse::success(SizeGuide {
        html_content: settings.size_guide_html,
    }))
}

pub async fn submit_contact(
    state: &AppState,
    payload: ContactRequest,
) -> AppResult<ApiResponse<MessageResponse>> {
    require_text(&payload.name, "name")?;
    require_text(&payload.message, "message")?;
    if !payload.email.contains('@') {
        return Err(AppError::invalid("email is not valid"));
    }

    let message = ContactActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        email: Set(payload.email.trim().to_string()),
        message: Set(payload.message.trim().to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    tracing::info!(contact_id = %message.id, "contact message received");

    Ok(ApiResponse::success(MessageResponse {
        message: "Message sent successfully.".into(),
    }))
}
