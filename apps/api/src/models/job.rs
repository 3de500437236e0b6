use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::SkillRequirements;
use crate::models::company::{CompanyRow, CompanySummary};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub location: Option<String>,
    pub remote: bool,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application tally, sent as `_count: { applications }` like the web client expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct ApplicationCount {
    #[sqlx(rename = "application_count")]
    pub applications: i64,
}

impl From<i64> for ApplicationCount {
    fn from(applications: i64) -> Self {
        ApplicationCount { applications }
    }
}

/// A job with its owning company and number of applications received.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: JobRow,
    #[sqlx(flatten)]
    pub company: CompanySummary,
    #[sqlx(flatten)]
    #[serde(rename = "_count")]
    pub count: ApplicationCount,
}

impl SkillRequirements for JobListing {
    fn required_skills(&self) -> &[String] {
        &self.job.skills
    }
}

/// A company's own job with its application count (no company join).
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobWithCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: JobRow,
    #[sqlx(flatten)]
    #[serde(rename = "_count")]
    pub count: ApplicationCount,
}

/// Single job view with the full company profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: JobRow,
    pub company: CompanyRow,
    #[serde(rename = "_count")]
    pub count: ApplicationCount,
}

/// Job columns joined onto an application, aliased with a `job_` prefix. The
/// owning company stays nested under `company`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobBrief {
    #[sqlx(rename = "job_id")]
    pub id: Uuid,
    #[sqlx(rename = "job_title")]
    pub title: String,
    #[sqlx(rename = "job_location")]
    pub location: Option<String>,
    #[sqlx(flatten)]
    pub company: CompanySummary,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::matching::rank_jobs_by_match;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub(crate) fn acme() -> CompanySummary {
        CompanySummary {
            id: Uuid::nil(),
            name: "Acme".to_string(),
            logo: Some("https://cdn.example.com/acme.png".to_string()),
            location: Some("Accra".to_string()),
            industry: Some("Fintech".to_string()),
        }
    }

    fn job_row(title: &str, required: &[&str]) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            title: title.to_string(),
            description: format!("{title} internship"),
            requirements: vec![],
            responsibilities: vec![],
            benefits: vec![],
            location: Some("Remote".to_string()),
            remote: true,
            duration: Some("3 months".to_string()),
            stipend: None,
            skills: skills(required),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn listing(title: &str, required: &[&str], applications: i64) -> JobListing {
        JobListing {
            job: job_row(title, required),
            company: acme(),
            count: applications.into(),
        }
    }

    #[test]
    fn test_listing_sends_count_under_underscore_count() {
        let value = serde_json::to_value(listing("Data", &["SQL"], 3)).unwrap();
        assert_eq!(value["_count"]["applications"], 3);
        assert!(value.get("applicationCount").is_none());
        assert!(value.get("count").is_none());
        assert_eq!(value["company"]["name"], "Acme");
    }

    #[test]
    fn test_company_jobs_send_count_under_underscore_count() {
        let job = JobWithCount {
            job: job_row("Design", &["Figma"]),
            count: ApplicationCount::from(7),
        };
        let value = serde_json::to_value(job).unwrap();
        assert_eq!(value["_count"]["applications"], 7);
        assert_eq!(value["title"], "Design");
    }

    #[test]
    fn test_job_brief_nests_company() {
        let brief = JobBrief {
            id: Uuid::nil(),
            title: "Backend".to_string(),
            location: None,
            company: acme(),
        };
        let value = serde_json::to_value(brief).unwrap();
        assert_eq!(value["title"], "Backend");
        assert_eq!(value["company"]["name"], "Acme");
        assert_eq!(value["company"]["logo"], "https://cdn.example.com/acme.png");
        assert!(value.get("companyName").is_none());
    }

    #[test]
    fn test_ranked_listings_keep_job_shape() {
        let candidate = skills(&["SQL", "Python"]);
        let jobs = vec![
            listing("Design", &["Figma"], 0),
            listing("Analytics A", &["SQL", "Excel"], 1),
            listing("Analytics B", &["Python", "Tableau"], 2),
            listing("Data", &["SQL", "Python"], 5),
        ];

        let ranked = rank_jobs_by_match(&candidate, jobs);
        let value = serde_json::to_value(&ranked).unwrap();

        let titles: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|j| (j["title"].as_str().unwrap(), j["matchScore"].as_u64().unwrap()))
            .collect();
        assert_eq!(
            titles,
            vec![
                ("Data", 100),
                ("Analytics A", 50),
                ("Analytics B", 50),
                ("Design", 0),
            ]
        );

        let top = &value[0];
        assert_eq!(top["skills"], serde_json::json!(["SQL", "Python"]));
        assert_eq!(top["company"]["name"], "Acme");
        assert_eq!(top["_count"]["applications"], 5);
        assert!(top.get("job").is_none());
    }
}
