use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::CandidateProfile;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InternRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub resume: Option<String>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InternRow {
    pub fn candidate_profile(&self) -> CandidateProfile<'_> {
        CandidateProfile {
            skills: &self.skills,
            bio: self.bio.as_deref(),
            education: self.education.as_deref(),
            experience: self.experience.as_deref(),
            location: self.location.as_deref(),
            profile_pic: self.profile_pic.as_deref(),
            resume: self.resume.as_deref(),
        }
    }
}

/// Public browse card. Leaves out experience and resume, which only the
/// detail view shows.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InternCard {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Applicant columns joined onto a company's application list.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    #[sqlx(rename = "intern_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(rename = "intern_skills")]
    pub skills: Vec<String>,
    #[sqlx(rename = "intern_location")]
    pub location: Option<String>,
    #[sqlx(rename = "intern_email")]
    pub email: String,
}
