//! Axum route handlers for the job board.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::auth::extract::CompanyUser;
use crate::company::queries::{find_company, find_company_by_user};
use crate::errors::AppError;
use crate::jobs::queries::{
    count_applications, delete_job, find_job, insert_job, list_jobs, update_job, JobFields,
    JobFilter,
};
use crate::matching::job_requires_any;
use crate::models::company::CompanyRow;
use crate::models::job::{ApplicationCount, JobDetail, JobListing};
use crate::state::AppState;
use crate::validation::{all_filled, filled, non_blank};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobListParams {
    pub search: Option<String>,
    pub location: Option<String>,
    /// Only the literal "true" selects remote jobs; any other value selects on-site.
    pub remote: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl From<JobPayload> for JobFields {
    fn from(p: JobPayload) -> Self {
        JobFields {
            title: p.title,
            description: p.description,
            requirements: p.requirements.unwrap_or_default(),
            responsibilities: p.responsibilities.unwrap_or_default(),
            benefits: p.benefits.unwrap_or_default(),
            location: p.location,
            remote: p.remote,
            duration: p.duration,
            stipend: p.stipend,
            skills: p.skills.unwrap_or_default(),
        }
    }
}

impl JobFields {
    /// A blank title or description keeps the stored value.
    fn for_update(payload: JobPayload) -> Self {
        let title = non_blank(payload.title.clone());
        let description = non_blank(payload.description.clone());
        JobFields {
            title,
            description,
            ..JobFields::from(payload)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    axum_extra::extract::Query(params): axum_extra::extract::Query<JobListParams>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let filter = JobFilter {
        search: filled(&params.search),
        location: filled(&params.location),
        remote: params.remote.as_deref().map(|r| r == "true"),
    };
    let mut jobs = list_jobs(&state.db, &filter).await?;

    if !params.skills.is_empty() {
        jobs.retain(|listing| job_requires_any(&listing.job.skills, &params.skills));
    }

    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobDetail>, AppError> {
    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    let company = find_company(&state.db, job.company_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;
    let count = count_applications(&state.db, job.id).await?.into();

    Ok(Json(JobDetail {
        job,
        company,
        count,
    }))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
    Json(payload): Json<JobPayload>,
) -> Result<(StatusCode, Json<JobDetail>), AppError> {
    if !all_filled(&[&payload.title, &payload.description]) {
        return Err(AppError::Validation(
            "Title and description are required".to_string(),
        ));
    }

    let company = require_company(&state, user_id).await?;
    let job = insert_job(&state.db, company.id, &JobFields::from(payload)).await?;

    info!("Company {} posted job {} ({})", company.id, job.id, job.title);

    Ok((
        StatusCode::CREATED,
        Json(JobDetail {
            job,
            company,
            count: ApplicationCount::default(),
        }),
    ))
}

/// PUT /api/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
    Path(job_id): Path<Uuid>,
    Json(payload): Json<JobPayload>,
) -> Result<Json<JobDetail>, AppError> {
    let company = require_company(&state, user_id).await?;
    require_owned_job(&state, &company, job_id, "Not authorized to update this job").await?;

    let fields = JobFields::for_update(payload);
    let job = update_job(&state.db, job_id, &fields).await?;
    let count = count_applications(&state.db, job.id).await?.into();

    info!("Company {} updated job {}", company.id, job.id);

    Ok(Json(JobDetail {
        job,
        company,
        count,
    }))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    CompanyUser(user_id): CompanyUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let company = require_company(&state, user_id).await?;
    require_owned_job(&state, &company, job_id, "Not authorized to delete this job").await?;

    delete_job(&state.db, job_id).await?;
    info!("Company {} deleted job {}", company.id, job_id);

    Ok(Json(json!({ "message": "Job deleted successfully" })))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn require_company(state: &AppState, user_id: Uuid) -> Result<CompanyRow, AppError> {
    find_company_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
}

/// Missing jobs and jobs owned by another company both answer 403.
async fn require_owned_job(
    state: &AppState,
    company: &CompanyRow,
    job_id: Uuid,
    denial: &str,
) -> Result<(), AppError> {
    match find_job(&state.db, job_id).await? {
        Some(job) if job.company_id == company.id => Ok(()),
        _ => Err(AppError::Forbidden(denial.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(body: &str) -> JobPayload {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_update_keeps_stored_title_when_blank() {
        let fields = JobFields::for_update(payload(
            r#"{"title":"   ","description":"","stipend":"500 USD","skills":["SQL"]}"#,
        ));
        assert_eq!(fields.title, None);
        assert_eq!(fields.description, None);
        assert_eq!(fields.stipend.as_deref(), Some("500 USD"));
        assert_eq!(fields.skills, vec!["SQL".to_string()]);
    }

    #[test]
    fn test_update_omitted_lists_reset_to_empty() {
        let fields = JobFields::for_update(payload(r#"{"title":"Data Intern"}"#));
        assert_eq!(fields.title.as_deref(), Some("Data Intern"));
        assert!(fields.skills.is_empty());
        assert!(fields.requirements.is_empty());
    }
}
