//! Axum route handlers for the company dashboard.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::CompanyUser;
use crate::auth::queries::account_info;
use crate::company::queries::{
    applications_for_company, find_company_by_user, update_company, CompanyChanges,
};
use crate::errors::AppError;
use crate::jobs::queries::jobs_for_company;
use crate::models::application::CompanyApplication;
use crate::models::company::CompanyRow;
use crate::models::job::JobWithCount;
use crate::models::user::AccountInfo;
use crate::state::AppState;
use crate::validation::non_blank;

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
}

impl From<UpdateCompanyRequest> for CompanyChanges {
    fn from(req: UpdateCompanyRequest) -> Self {
        CompanyChanges {
            // A blank name keeps the stored one.
            name: non_blank(req.name),
            description: req.description,
            website: req.website,
            industry: req.industry,
            location: req.location,
            logo: req.logo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyProfileResponse {
    #[serde(flatten)]
    pub company: CompanyRow,
    pub user: AccountInfo,
    pub jobs: Vec<JobWithCount>,
}

/// GET /api/company/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    let company = find_company_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;
    let user = account_info(&state.db, user_id).await?;
    let jobs = jobs_for_company(&state.db, company.id).await?;

    Ok(Json(CompanyProfileResponse { company, user, jobs }))
}

/// PUT /api/company/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyRow>, AppError> {
    let changes = CompanyChanges::from(req);
    let company = update_company(&state.db, user_id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

    info!("Updated company profile {}", company.id);
    Ok(Json(company))
}

/// GET /api/company/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
) -> Result<Json<Vec<CompanyApplication>>, AppError> {
    if find_company_by_user(&state.db, user_id).await?.is_none() {
        return Err(AppError::NotFound("Company not found".to_string()));
    }

    Ok(Json(applications_for_company(&state.db, user_id).await?))
}
