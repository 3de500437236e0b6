use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::application::CompanyApplication;
use crate::models::company::CompanyRow;

pub struct NewCompany<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub website: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Editable company fields. `None` leaves the stored value untouched.
#[derive(Debug, Default)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
}

pub async fn insert_company(
    conn: &mut PgConnection,
    user_id: Uuid,
    company: NewCompany<'_>,
) -> sqlx::Result<CompanyRow> {
    sqlx::query_as::<_, CompanyRow>(
        r#"
        INSERT INTO companies (user_id, name, description, website, industry, location)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(company.name)
    .bind(company.description)
    .bind(company.website)
    .bind(company.industry)
    .bind(company.location)
    .fetch_one(conn)
    .await
}

pub async fn find_company_by_user(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Option<CompanyRow>> {
    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_company(pool: &PgPool, company_id: Uuid) -> sqlx::Result<Option<CompanyRow>> {
    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
        .bind(company_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_company(
    pool: &PgPool,
    user_id: Uuid,
    changes: &CompanyChanges,
) -> sqlx::Result<Option<CompanyRow>> {
    sqlx::query_as::<_, CompanyRow>(
        r#"
        UPDATE companies SET
            name        = COALESCE($2, name),
            description = COALESCE($3, description),
            website     = COALESCE($4, website),
            industry    = COALESCE($5, industry),
            location    = COALESCE($6, location),
            logo        = COALESCE($7, logo),
            updated_at  = now()
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(&changes.website)
    .bind(&changes.industry)
    .bind(&changes.location)
    .bind(&changes.logo)
    .fetch_optional(pool)
    .await
}

const COMPANY_APPLICATION_SELECT: &str = r#"
    SELECT a.*,
           j.title      AS job_title,
           j.location   AS job_location,
           j.company_id,
           c.name       AS company_name,
           c.logo       AS company_logo,
           c.location   AS company_location,
           c.industry   AS company_industry,
           i.first_name,
           i.last_name,
           i.skills     AS intern_skills,
           i.location   AS intern_location,
           u.email      AS intern_email
    FROM applications a
    JOIN jobs j      ON j.id = a.job_id
    JOIN companies c ON c.id = j.company_id
    JOIN interns i   ON i.id = a.intern_id
    JOIN users u     ON u.id = i.user_id
"#;

/// Every application to any job owned by the company account, newest first.
pub async fn applications_for_company(
    pool: &PgPool,
    company_user_id: Uuid,
) -> sqlx::Result<Vec<CompanyApplication>> {
    let sql = format!("{COMPANY_APPLICATION_SELECT} WHERE c.user_id = $1 ORDER BY a.applied_at DESC");
    sqlx::query_as::<_, CompanyApplication>(&sql)
        .bind(company_user_id)
        .fetch_all(pool)
        .await
}

pub async fn company_application(
    pool: &PgPool,
    application_id: Uuid,
) -> sqlx::Result<CompanyApplication> {
    let sql = format!("{COMPANY_APPLICATION_SELECT} WHERE a.id = $1");
    sqlx::query_as::<_, CompanyApplication>(&sql)
        .bind(application_id)
        .fetch_one(pool)
        .await
}
