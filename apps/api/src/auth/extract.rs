//! Request extractors for authenticated routes.
//!
//! `AuthUser` accepts any valid bearer token. `CompanyUser` and `InternUser`
//! additionally enforce the account type and reject with 403 otherwise.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserType;
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub user_type: UserType,
}

#[derive(Debug, Clone, Copy)]
pub struct CompanyUser(pub Uuid);

#[derive(Debug, Clone, Copy)]
pub struct InternUser(pub Uuid);

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(parts)?;
        let claims = state.tokens.verify(token)?;
        Ok(AuthUser {
            user_id: claims.user_id,
            user_type: claims.user_type,
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CompanyUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match user.user_type {
            UserType::Company => Ok(CompanyUser(user.user_id)),
            UserType::Intern => Err(AppError::Forbidden("Company access required".to_string())),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for InternUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match user.user_type {
            UserType::Intern => Ok(InternUser(user.user_id)),
            UserType::Company => Err(AppError::Forbidden("Intern access required".to_string())),
        }
    }
}
