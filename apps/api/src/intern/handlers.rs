//! Axum route handlers for intern profiles, recommendations and profile strength.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::extract::InternUser;
use crate::auth::queries::account_info;
use crate::errors::AppError;
use crate::intern::queries::{
    applications_for_intern, browse_interns, find_intern, find_intern_by_user, update_intern,
    InternChanges,
};
use crate::jobs::queries::{list_jobs, JobFilter};
use crate::matching::{
    compute_pie_segments, compute_strength, rank_jobs_by_match, skills_overlap, PieSegment,
    ProfileStrength, RankedJob,
};
use crate::models::application::InternApplication;
use crate::models::intern::{InternCard, InternRow};
use crate::models::job::JobListing;
use crate::models::user::AccountInfo;
use crate::state::AppState;
use crate::validation::filled;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    pub search: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInternRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub resume: Option<String>,
    pub profile_pic: Option<String>,
}

impl From<UpdateInternRequest> for InternChanges {
    fn from(req: UpdateInternRequest) -> Self {
        InternChanges {
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
            skills: req.skills.unwrap_or_default(),
            education: req.education,
            experience: req.experience,
            location: req.location,
            resume: req.resume,
            profile_pic: req.profile_pic,
        }
    }
}

/// The intern's own dashboard view.
#[derive(Debug, Serialize)]
pub struct InternProfileResponse {
    #[serde(flatten)]
    pub intern: InternRow,
    pub user: AccountInfo,
    pub applications: Vec<InternApplication>,
}

/// What a recruiter sees when opening a profile.
#[derive(Debug, Serialize)]
pub struct PublicInternResponse {
    #[serde(flatten)]
    pub intern: InternRow,
    pub strength: ProfileStrength,
}

#[derive(Debug, Serialize)]
pub struct StrengthResponse {
    #[serde(flatten)]
    pub strength: ProfileStrength,
    pub segments: Vec<PieSegment>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/intern/browse
///
/// `skills` may repeat (`?skills=React&skills=SQL`); an intern is kept when
/// any of their skills matches any requested one.
pub async fn handle_browse(
    State(state): State<AppState>,
    axum_extra::extract::Query(params): axum_extra::extract::Query<BrowseParams>,
) -> Result<Json<Vec<InternCard>>, AppError> {
    let mut interns =
        browse_interns(&state.db, filled(&params.search), filled(&params.location)).await?;

    if !params.skills.is_empty() {
        interns.retain(|intern| skills_overlap(&intern.skills, &params.skills));
    }

    Ok(Json(interns))
}

/// GET /api/intern/:id
pub async fn handle_get_intern(
    State(state): State<AppState>,
    Path(intern_id): Path<Uuid>,
) -> Result<Json<PublicInternResponse>, AppError> {
    let intern = find_intern(&state.db, intern_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Intern not found".to_string()))?;

    let strength = compute_strength(Some(&intern.candidate_profile()));
    Ok(Json(PublicInternResponse { intern, strength }))
}

/// GET /api/intern/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    InternUser(user_id): InternUser,
) -> Result<Json<InternProfileResponse>, AppError> {
    let intern = require_intern(&state, user_id).await?;
    let user = account_info(&state.db, user_id).await?;
    let applications = applications_for_intern(&state.db, intern.id).await?;

    Ok(Json(InternProfileResponse {
        intern,
        user,
        applications,
    }))
}

/// PUT /api/intern/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    InternUser(user_id): InternUser,
    Json(req): Json<UpdateInternRequest>,
) -> Result<Json<InternRow>, AppError> {
    let changes = InternChanges::from(req);
    let intern = update_intern(&state.db, user_id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Intern not found".to_string()))?;

    info!("Updated intern profile {}", intern.id);
    Ok(Json(intern))
}

/// GET /api/intern/profile/strength
///
/// Completion nudge for the intern: score, per-category breakdown, and
/// pie-chart slices of what makes up the score.
pub async fn handle_profile_strength(
    State(state): State<AppState>,
    InternUser(user_id): InternUser,
) -> Result<Json<StrengthResponse>, AppError> {
    let intern = require_intern(&state, user_id).await?;
    let profile = intern.candidate_profile();

    Ok(Json(StrengthResponse {
        strength: compute_strength(Some(&profile)),
        segments: compute_pie_segments(Some(&profile)),
    }))
}

/// GET /api/intern/recommended-jobs
///
/// Every job on the board, best skill match first.
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    InternUser(user_id): InternUser,
) -> Result<Json<Vec<RankedJob<JobListing>>>, AppError> {
    let intern = require_intern(&state, user_id).await?;
    let jobs = list_jobs(&state.db, &JobFilter::default()).await?;

    let ranked = rank_jobs_by_match(&intern.skills, jobs);
    info!(
        "Ranked {} jobs for intern {} (top score: {})",
        ranked.len(),
        intern.id,
        ranked.first().map(|r| r.match_score).unwrap_or(0)
    );

    Ok(Json(ranked))
}

pub(crate) async fn require_intern(state: &AppState, user_id: Uuid) -> Result<InternRow, AppError> {
    find_intern_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Intern not found".to_string()))
}
