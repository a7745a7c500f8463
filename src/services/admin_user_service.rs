use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::admin::{CreateAdminUserRequest, UpdateAdminUserRequest},
    entity::admin_users::{ActiveModel as AdminActive, Column as AdminCol, Entity as AdminUsers},
    error::{AppError, AppResult},
    lifecycle::require_text,
    mapper::map_admin_user,
    middleware::auth::AdminPrincipal,
    models::{AdminRole, AdminStatus, AdminUser},
    response::ApiResponse,
    services::{
        auth_service::{hash_password, validate_password},
        record_admin_action,
    },
    state::AppState,
};

fn parse_role(raw: &str) -> AppResult<AdminRole> {
    AdminRole::parse(raw.trim()).ok_or_else(|| AppError::invalid(format!("unknown role {raw:?}")))
}

fn parse_status(raw: &str) -> AppResult<AdminStatus> {
    AdminStatus::parse(raw.trim())
        .ok_or_else(|| AppError::invalid(format!("unknown admin status {raw:?}")))
}

pub async fn list_admin_users(
    state: &AppState,
    admin: &AdminPrincipal,
) -> AppResult<ApiResponse<Vec<AdminUser>>> {
    admin.ensure_area(AdminArea::AdminUsers)?;
    let users = AdminUsers::find()
        .order_by_asc(AdminCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(map_admin_user)
        .collect::<AppResult<Vec<_>>>()?;
    Ok(ApiResponse::success(users))
}

pub async fn create_admin_user(
    state: &AppState,
    admin: &AdminPrincipal,
    payload: CreateAdminUserRequest,
) -> AppResult<ApiResponse<AdminUser>> {
    admin.ensure_area(AdminArea::AdminUsers)?;
    require_text(&payload.name, "name")?;
    let email = payload.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::invalid("email is not valid"));
    }
    validate_password(&payload.password)?;
    let role = parse_role(&payload.role)?;

    let exists = AdminUsers::find()
        .filter(AdminCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exists.is_some() {
        return Err(AppError::conflict("Email is already taken"));
    }

    let model = AdminActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        email: Set(email),
        password_hash: Set(hash_password(&payload.password)?),
        role: Set(role.as_str().to_string()),
        status: Set(AdminStatus::Active.as_str().to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    record_admin_action(
        state,
        admin,
        "Created Admin User",
        format!("{} as {}", model.email, role.as_str()),
    )
    .await;

    Ok(ApiResponse::success(map_admin_user(model)?))
}

/// Partial update. The store must keep at least one active owner.
pub async fn update_admin_user(
    state: &AppState,
    admin: &AdminPrincipal,
    id: Uuid,
    payload: UpdateAdminUserRequest,
) -> AppResult<ApiResponse<AdminUser>> {
    admin.ensure_area(AdminArea::AdminUsers)?;
    let role = payload.role.as_deref().map(parse_role).transpose()?;
    let status = payload.status.as_deref().map(parse_status).transpose()?;
    if let Some(password) = payload.password.as_deref() {
        validate_password(password)?;
    }

    let txn = state.orm.begin().await?;
    let existing = AdminUsers::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;
    let current = map_admin_user(existing.clone())?;

    let was_active_owner =
        current.role == AdminRole::Owner && current.status == AdminStatus::Active;
    let stays_active_owner = role.unwrap_or(current.role) == AdminRole::Owner
        && status.unwrap_or(current.status) == AdminStatus::Active;
    if was_active_owner && !stays_active_owner {
        let active_owners = AdminUsers::find()
            .filter(AdminCol::Role.eq(AdminRole::Owner.as_str()))
            .filter(AdminCol::Status.eq(AdminStatus::Active.as_str()))
            .count(&txn)
            .await?;
        if active_owners <= 1 {
            return Err(AppError::conflict(
                "the last active owner cannot be demoted or disabled",
            ));
        }
    }

    let mut active: AdminActive = existing.into();
    if let Some(name) = payload.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        active.name = Set(name.to_string());
    }
    if let Some(role) = role {
        active.role = Set(role.as_str().to_string());
    }
    if let Some(status) = status {
        active.status = Set(status.as_str().to_string());
    }
    if let Some(password) = payload.password.as_deref() {
        active.password_hash = Set(hash_password(password)?);
    }
    let model = active.update(&txn).await?;
    txn.commit().await?;

    let updated = map_admin_user(model)?;
    record_admin_action(
        state,
        admin,
        "Updated Admin User",
        format!(
            "{} is {} ({})",
            updated.email,
            updated.role.as_str(),
            updated.status.as_str()
        ),
    )
    .await;

    Ok(ApiResponse::success(updated))
}
