use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{
    access::AdminArea,
    dto::auth::{CUSTOMER_ROLE, Claims},
    error::AppError,
    models::AdminRole,
    state::AppState,
};

/// A signed-in customer.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

/// A signed-in back-office user.
#[derive(Debug, Clone)]
pub struct AdminPrincipal {
    pub admin_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}

impl AdminPrincipal {
    pub fn ensure_area(&self, area: AdminArea) -> Result<(), AppError> {
        self.role.ensure_access(area)
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_str = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?
        .trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(token)
}

pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, AppError> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|err| {
        tracing::debug!(error = %err, "rejected bearer token");
        AppError::Unauthorized
    })?;
    Ok(decoded.claims)
}

fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<(Claims, Uuid), AppError> {
    let token = bearer_token(parts)?;
    let claims = decode_claims(token, &state.config.jwt_secret)?;
    let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;
    Ok((claims, id))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (claims, user_id) = claims_from_parts(parts, state)?;
        if claims.role != CUSTOMER_ROLE {
            return Err(AppError::Forbidden);
        }

        Ok(AuthUser {
            user_id,
            email: claims.email,
            name: claims.name,
        })
    }
}

impl FromRequestParts<AppState> for AdminPrincipal {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (claims, admin_id) = claims_from_parts(parts, state)?;
        let role = AdminRole::parse(&claims.role).ok_or(AppError::Forbidden)?;

        Ok(AdminPrincipal {
            admin_id,
            email: claims.email,
            name: claims.name,
            role,
        })
    }
}
