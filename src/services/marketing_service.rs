use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::admin::{AnnouncementRequest, HeroSlideInput},
    entity::hero_slides::{ActiveModel as SlideActive, Column as SlideCol, Entity as HeroSlides},
    error::{AppError, AppResult},
    lifecycle::require_text,
    mapper::{map_hero_slide, map_store_settings},
    middleware::auth::AdminPrincipal,
    models::{HeroSlide, StoreSettings},
    response::{Ack, ApiResponse},
    services::{content_service::load_settings, record_admin_action, settings_service::save_settings},
    state::AppState,
};

pub async fn update_announcement(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: AnnouncementRequest,
) -> AppResult<ApiResponse<StoreSettings>> {
    admin.ensure_area(AdminArea::Marketing)?;
    let mut settings = load_settings(&state.orm).await?;
    settings.announcement_text = payload.text.trim().to_string();
    settings.announcement_active = payload.is_active;
    save_settings(&state.orm, settings.clone()).await?;

    record_admin_action(
        state,
        admin,
        "Updated Announcement",
        format!(
            "{} ({})",
            settings.announcement_text,
            if settings.announcement_active { "active" } else { "hidden" }
        ),
    )
    .await;

    Ok(ApiResponse::success(map_store_settings(&settings)))
}

pub async fn list_slides(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<Vec<HeroSlide>>> {
    admin.ensure_area(AdminArea::Marketing)?;
    let slides = HeroSlides::find()
        .order_by_asc(SlideCol::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(map_hero_slide)
        .collect();
    Ok(ApiResponse::success(slides))
}

pub async fn create_slide(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: HeroSlideInput,
) -> AppResult<ApiResponse<HeroSlide>> {
    admin.ensure_area(AdminArea::Marketing)?;
    require_text(&payload.image_url, "image url")?;

    let model = SlideActive {
        id: Set(Uuid::new_v4()),
        image_url: Set(payload.image_url.trim().to_string()),
        title: Set(payload.title),
        subtitle: Set(payload.subtitle),
        link: Set(payload.link),
        is_active: Set(payload.is_active),
        sort_order: Set(payload.sort_order),
    }
    .insert(&state.orm)
    .await?;

    record_admin_action(state, admin, "Created Hero Slide", format!("Slide {}", model.id)).await;

    Ok(ApiResponse::success(map_hero_slide(model)))
}

pub async fn update_slide(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: HeroSlideInput,
) -> AppResult<ApiResponse<HeroSlide>> {
    admin.ensure_area(AdminArea::Marketing)?;
    require_text(&payload.image_url, "image url")?;

    let existing = HeroSlides::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let mut active: SlideActive = existing.into();
    active.image_url = Set(payload.image_url.trim().to_string());
    active.title = Set(payload.title);
    active.subtitle = Set(payload.subtitle);
    active.link = Set(payload.link);
    active.is_active = Set(payload.is_active);
    active.sort_order = Set(payload.sort_order);
    let model = active.update(&state.orm).await?;

    record_admin_action(state, admin, "Updated Hero Slide", format!("Slide {id}")).await;

    Ok(ApiResponse::success(map_hero_slide(model)))
}

pub async fn delete_slide(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<Ack>> {
    admin.ensure_area(AdminArea::Marketing)?;
    let result = HeroSlides::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    record_admin_action(state, admin, "Deleted Hero Slide", format!("Slide {id}")).await;

    Ok(ApiResponse::success(Ack::ok()))
}
