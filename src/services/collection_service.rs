use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::admin::CollectionInput,
    entity::collections::{ActiveModel as CollectionActive, Column as CollectionCol, Entity as Collections},
    error::{AppError, AppResult},
    lifecycle::require_text,
    mapper::map_collection,
    middleware::auth::AdminPrincipal,
    models::Collection,
    response::{Ack, ApiResponse},
    routes::params::CollectionQuery,
    services::record_admin_action,
    state::AppState,
};

pub async fn list_collections(
    state: &AppState,
    query: CollectionQuery,
) -> AppResult<ApiResponse<Vec<Collection>>> {
    let mut finder = Collections::find().order_by_asc(CollectionCol::Name);
    if query.home == Some(true) {
        finder = finder.filter(CollectionCol::ShowOnHome.eq(true));
    }
    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(map_collection)
        .collect();
    Ok(ApiResponse::success(items))
}

pub async fn admin_list(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<Vec<Collection>>> {
    admin.ensure_area(AdminArea::Collections)?;
    list_collections(state, CollectionQuery::default()).await
}

pub async fn create_collection(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: CollectionInput,
) -> AppResult<ApiResponse<Collection>> {
    admin.ensure_area(AdminArea::Collections)?;
    require_text(&payload.name, "name")?;

    let model = CollectionActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
        show_on_home: Set(payload.show_on_home),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    record_admin_action(
        state,
        admin,
        "Created Collection",
        format!("Collection {}", model.name),
    )
    .await;

    Ok(ApiResponse::success(map_collection(model)))
}

pub async fn update_collection(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: CollectionInput,
) -> AppResult<ApiResponse<Collection>> {
    admin.ensure_area(AdminArea::Collections)?;
    require_text(&payload.name, "name")?;

    let existing = Collections::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CollectionActive = existing.into();
    active.name = Set(payload.name.trim().to_string());
    active.description = Set(payload.description);
    active.image_url = Set(payload.image_url);
    active.show_on_home = Set(payload.show_on_home);
    let model = active.update(&state.orm).await?;

    record_admin_action(
        state,
        admin,
        "Updated Collection",
        format!("Collection {}", model.name),
    )
    .await;

    Ok(ApiResponse::success(map_collection(model)))
}

pub async fn delete_collection(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
) -> AppResult<ApiResponse<Ack>> {
    admin.ensure_area(AdminArea::Collections)?;
    let result = Collections::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    record_admin_action(state, admin, "Deleted Collection", format!("Collection {id}")).await;

    Ok(ApiResponse::success(Ack::ok()))
}
