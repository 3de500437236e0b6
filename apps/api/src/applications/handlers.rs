use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::applications::queries::{
    application_owner, find_application_for, insert_application, set_status,
};
use crate::auth::extract::{CompanyUser, InternUser};
use crate::company::queries::{company_application, find_company_by_user};
use crate::errors::{conflict_on_unique, AppError};
use crate::intern::handlers::require_intern;
use crate::intern::queries::{applications_for_intern, intern_application};
use crate::jobs::queries::find_job;
use crate::models::application::{ApplicationStatus, CompanyApplication, InternApplication};
use crate::state::AppState;

const ALREADY_APPLIED: &str = "Already applied to this job";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_id: Option<Uuid>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
}

/// POST /api/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    InternUser(user_id): InternUser,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<InternApplication>), AppError> {
    let job_id = req
        .job_id
        .ok_or_else(|| AppError::Validation("Job ID is required".to_string()))?;

    let intern = require_intern(&state, user_id).await?;
    if find_job(&state.db, job_id).await?.is_none() {
        return Err(AppError::NotFound("Job not found".to_string()));
    }
    if find_application_for(&state.db, job_id, intern.id).await?.is_some() {
        return Err(AppError::Conflict(ALREADY_APPLIED.to_string()));
    }

    let application = insert_application(&state.db, job_id, intern.id, req.cover_letter.as_deref())
        .await
        .map_err(|e| conflict_on_unique(e, ALREADY_APPLIED))?;

    info!("Intern {} applied to job {}", intern.id, job_id);

    let view = intern_application(&state.db, application.id).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/applications/my-applications
pub async fn handle_my_applications(
    State(state): State<AppState>,
    InternUser(user_id): InternUser,
) -> Result<Json<Vec<InternApplication>>, AppError> {
    let intern = require_intern(&state, user_id).await?;
    Ok(Json(applications_for_intern(&state.db, intern.id).await?))
}

/// PATCH /api/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
    Path(application_id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<CompanyApplication>, AppError> {
    let status: ApplicationStatus = req
        .status
        .as_deref()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

    if find_company_by_user(&state.db, user_id).await?.is_none() {
        return Err(AppError::NotFound("Company not found".to_string()));
    }

    let owner = application_owner(&state.db, application_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
    if owner != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to update this application".to_string(),
        ));
    }

    set_status(&state.db, application_id, status).await?;
    info!("Application {application_id} marked {status}");

    Ok(Json(company_application(&state.db, application_id).await?))
}
