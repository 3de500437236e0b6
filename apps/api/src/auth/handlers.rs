//! Axum route handlers for registration, login and session lookup.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::extract::AuthUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::queries::{find_user, find_user_by_email, insert_user};
use crate::company::queries::{find_company_by_user, insert_company, NewCompany};
use crate::errors::{conflict_on_unique, AppError};
use crate::intern::queries::{find_intern_by_user, insert_intern, NewIntern};
use crate::models::company::CompanyRow;
use crate::models::intern::InternRow;
use crate::models::user::{UserRow, UserType};
use crate::state::AppState;
use crate::validation::{all_filled, filled};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInternRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub user_type: String,
    pub company: Option<CompanyRow>,
    pub intern: Option<InternRow>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

const ALREADY_EXISTS: &str = "User already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/auth/register/company
pub async fn handle_register_company(
    State(state): State<AppState>,
    Json(req): Json<RegisterCompanyRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let (Some(email), Some(password), Some(name)) =
        (filled(&req.email), filled(&req.password), filled(&req.name))
    else {
        return Err(AppError::Validation(
            "Email, password, and company name are required".to_string(),
        ));
    };

    ensure_email_free(&state.db, email).await?;
    let password_hash = hash_password(password.to_string()).await?;

    let mut tx = state.db.begin().await?;
    let user = insert_user(&mut tx, email, &password_hash, UserType::Company)
        .await
        .map_err(|e| conflict_on_unique(e, ALREADY_EXISTS))?;
    let company = insert_company(
        &mut tx,
        user.id,
        NewCompany {
            name,
            description: req.description.as_deref(),
            website: req.website.as_deref(),
            industry: req.industry.as_deref(),
            location: req.location.as_deref(),
        },
    )
    .await?;
    tx.commit().await?;

    info!("Registered company {} ({}) as user {}", company.name, company.id, user.id);

    let token = state.tokens.issue(user.id, UserType::Company).map_err(anyhow::Error::from)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserView {
                id: user.id,
                email: user.email,
                user_type: user.user_type,
                company: Some(company),
                intern: None,
            },
        }),
    ))
}

/// POST /api/auth/register/intern
pub async fn handle_register_intern(
    State(state): State<AppState>,
    Json(req): Json<RegisterInternRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if !all_filled(&[&req.email, &req.password, &req.first_name, &req.last_name]) {
        return Err(AppError::Validation(
            "Email, password, first name, and last name are required".to_string(),
        ));
    }
    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    ensure_email_free(&state.db, email).await?;
    let password_hash = hash_password(password.to_string()).await?;
    let skills = req.skills.clone().unwrap_or_default();

    let mut tx = state.db.begin().await?;
    let user = insert_user(&mut tx, email, &password_hash, UserType::Intern)
        .await
        .map_err(|e| conflict_on_unique(e, ALREADY_EXISTS))?;
    let intern = insert_intern(
        &mut tx,
        user.id,
        NewIntern {
            first_name: req.first_name.as_deref().unwrap_or_default(),
            last_name: req.last_name.as_deref().unwrap_or_default(),
            bio: req.bio.as_deref(),
            skills: &skills,
            education: req.education.as_deref(),
            location: req.location.as_deref(),
        },
    )
    .await?;
    tx.commit().await?;

    info!("Registered intern {} as user {}", intern.id, user.id);

    let token = state.tokens.issue(user.id, UserType::Intern).map_err(anyhow::Error::from)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserView {
                id: user.id,
                email: user.email,
                user_type: user.user_type,
                company: None,
                intern: Some(intern),
            },
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (Some(email), Some(password)) = (filled(&req.email), filled(&req.password)) else {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    let user = find_user_by_email(&state.db, email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(password.to_string(), user.password.clone()).await? {
        warn!("Failed login attempt for user {}", user.id);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let user_type: UserType = user.user_type.parse()?;
    let token = state.tokens.issue(user.id, user_type).map_err(anyhow::Error::from)?;
    let user = user_view(&state.db, user).await?;

    Ok(Json(AuthResponse { token, user }))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserView>, AppError> {
    let user = find_user(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user_view(&state.db, user).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn ensure_email_free(pool: &PgPool, email: &str) -> Result<(), AppError> {
    match find_user_by_email(pool, email).await? {
        Some(_) => Err(AppError::Conflict(ALREADY_EXISTS.to_string())),
        None => Ok(()),
    }
}

/// Attaches whichever profile the account type owns.
async fn user_view(pool: &PgPool, user: UserRow) -> Result<UserView, AppError> {
    let (company, intern) = match user.user_type.parse::<UserType>()? {
        UserType::Company => (find_company_by_user(pool, user.id).await?, None),
        UserType::Intern => (None, find_intern_by_user(pool, user.id).await?),
    };

    Ok(UserView {
        id: user.id,
        email: user.email,
        user_type: user.user_type,
        company,
        intern,
    })
}
