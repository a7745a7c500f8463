use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dto::auth::{
        AdminAuthResponse, AuthResponse, CUSTOMER_ROLE, ChangePasswordRequest, Claims,
        LoginRequest, SignupRequest, UpdateProfileRequest,
    },
    entity::{
        admin_users::{Column as AdminCol, Entity as AdminUsers},
        users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    },
    error::{AppError, AppResult},
    lifecycle::require_text,
    mapper::{map_admin_user, map_user},
    middleware::auth::{AdminPrincipal, AuthUser},
    models::{AdminStatus, AdminUser, User},
    response::{Ack, ApiResponse},
    state::AppState,
};

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::invalid(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Sign a bearer token for a customer or an admin.
pub fn issue_token(
    config: &AppConfig,
    subject: Uuid,
    role: &str,
    email: &str,
    name: &str,
) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.jwt_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: subject.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn signup(state: &AppState, payload: SignupRequest) -> AppResult<ApiResponse<AuthResponse>> {
    let SignupRequest {
        name,
        email,
        password,
    } = payload;
    require_text(&name, "name")?;
    let email = normalize_email(&email);
    if !email.contains('@') {
        return Err(AppError::invalid("email is not valid"));
    }
    validate_password(&password)?;

    let exists = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exists.is_some() {
        return Err(AppError::conflict("Email is already taken"));
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        password_hash: Set(hash_password(&password)?),
        name: Set(name.trim().to_string()),
        address: Set(None),
        city: Set(None),
        postal_code: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    let token = issue_token(&state.config, user.id, CUSTOMER_ROLE, &user.email, &user.name)?;
    tracing::info!(user_id = %user.id, "customer signed up");

    Ok(ApiResponse::success(AuthResponse {
        user: map_user(user),
        token,
    }))
}

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<AuthResponse>> {
    let email = normalize_email(&payload.email);
    let user = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let token = issue_token(&state.config, user.id, CUSTOMER_ROLE, &user.email, &user.name)?;
    Ok(ApiResponse::success(AuthResponse {
        user: map_user(user),
        token,
    }))
}

pub async fn me(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let model = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(map_user(model)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub async fn update_profile(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    let model = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: UserActive = model.into();
    if let Some(name) = non_blank(payload.name) {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(non_blank(Some(address)));
    }
    if let Some(city) = payload.city {
        active.city = Set(non_blank(Some(city)));
    }
    if let Some(postal_code) = payload.postal_code {
        active.postal_code = Set(non_blank(Some(postal_code)));
    }
    let updated = active.update(&state.orm).await?;

    Ok(ApiResponse::success(map_user(updated)))
}

pub async fn change_password(
    state: &AppState,
    user: &AuthUser,
    payload: ChangePasswordRequest,
) -> AppResult<ApiResponse<Ack>> {
    validate_password(&payload.new_password)?;
    let model = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    if !verify_password(&payload.current_password, &model.password_hash)? {
        return Err(AppError::invalid("current password is incorrect"));
    }

    let mut active: UserActive = model.into();
    active.password_hash = Set(hash_password(&payload.new_password)?);
    active.update(&state.orm).await?;

    Ok(ApiResponse::success(Ack::ok()))
}

pub async fn admin_login(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<AdminAuthResponse>> {
    let email = normalize_email(&payload.email);
    let model = AdminUsers::find()
        .filter(AdminCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&payload.password, &model.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let admin = map_admin_user(model)?;
    if admin.status == AdminStatus::Disabled {
        tracing::warn!(admin_id = %admin.id, "disabled admin attempted login");
        return Err(AppError::Forbidden);
    }

    let token = issue_token(
        &state.config,
        admin.id,
        admin.role.as_str(),
        &admin.email,
        &admin.name,
    )?;
    Ok(ApiResponse::success(AdminAuthResponse { admin, token }))
}

pub async fn admin_me(state: &AppState, admin: &AdminPrincipal) -> AppResult<ApiResponse<AdminUser>> {
    let model = AdminUsers::find_by_id(admin.admin_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success(map_admin_user(model)?))
}
