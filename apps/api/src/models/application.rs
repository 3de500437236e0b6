use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::intern::ApplicantSummary;
use crate::models::job::JobBrief;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Reviewed => "REVIEWED",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// Any decision other than PENDING marks the application as reviewed.
    pub const fn is_reviewed(self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ApplicationStatus::Pending),
            "REVIEWED" => Ok(ApplicationStatus::Reviewed),
            "ACCEPTED" => Ok(ApplicationStatus::Accepted),
            "REJECTED" => Ok(ApplicationStatus::Rejected),
            other => Err(anyhow::anyhow!("Unknown application status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub intern_id: Uuid,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// An intern's application with the job and company it targets.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InternApplication {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: ApplicationRow,
    #[sqlx(flatten)]
    pub job: JobBrief,
}

/// An application as seen by the hiring company.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanyApplication {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: ApplicationRow,
    #[sqlx(flatten)]
    pub job: JobBrief,
    #[sqlx(flatten)]
    pub intern: ApplicantSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_only_known_values() {
        assert_eq!(
            "ACCEPTED".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Accepted
        );
        assert!("accepted".parse::<ApplicationStatus>().is_err());
        assert!("WITHDRAWN".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_only_pending_is_unreviewed() {
        assert!(!ApplicationStatus::Pending.is_reviewed());
        assert!(ApplicationStatus::Reviewed.is_reviewed());
        assert!(ApplicationStatus::Accepted.is_reviewed());
        assert!(ApplicationStatus::Rejected.is_reviewed());
    }

    #[test]
    fn test_intern_application_nests_job_company() {
        let job_id = Uuid::new_v4();
        let view = InternApplication {
            application: ApplicationRow {
                id: Uuid::new_v4(),
                job_id,
                intern_id: Uuid::new_v4(),
                cover_letter: Some("Keen to learn".to_string()),
                status: ApplicationStatus::Pending.to_string(),
                applied_at: Utc::now(),
                reviewed_at: None,
            },
            job: JobBrief {
                id: job_id,
                title: "Backend".to_string(),
                location: Some("Accra".to_string()),
                company: crate::models::job::tests::acme(),
            },
        };

        let value = serde_json::to_value(view).unwrap();
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["coverLetter"], "Keen to learn");
        assert_eq!(value["job"]["title"], "Backend");
        assert_eq!(value["job"]["company"]["name"], "Acme");
        assert!(value["job"].get("companyName").is_none());
    }
}
