use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub benefits: Vec<String>,
    pub company_size: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Company columns joined onto job listings, aliased with a `company_` prefix.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    #[sqlx(rename = "company_id")]
    pub id: Uuid,
    #[sqlx(rename = "company_name")]
    pub name: String,
    #[sqlx(rename = "company_logo")]
    pub logo: Option<String>,
    #[sqlx(rename = "company_location")]
    pub location: Option<String>,
    #[sqlx(rename = "company_industry")]
    pub industry: Option<String>,
}
