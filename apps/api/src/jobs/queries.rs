use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobListing, JobRow, JobWithCount};
use crate::search::contains_pattern;

/// Column values for a new or updated job. On update, `None` scalars keep
/// the stored value; list fields are always replaced.
#[derive(Debug, Default)]
pub struct JobFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Default)]
pub struct JobFilter<'a> {
    pub search: Option<&'a str>,
    pub location: Option<&'a str>,
    pub remote: Option<bool>,
}

const LISTING_SELECT: &str = r#"
    SELECT j.*,
           c.name     AS company_name,
           c.logo     AS company_logo,
           c.location AS company_location,
           c.industry AS company_industry,
           (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS application_count
    FROM jobs j
    JOIN companies c ON c.id = j.company_id
"#;

/// Public job board, newest first. `search` matches title or description.
pub async fn list_jobs(pool: &PgPool, filter: &JobFilter<'_>) -> sqlx::Result<Vec<JobListing>> {
    let sql = format!(
        r#"{LISTING_SELECT}
        WHERE ($1::text IS NULL OR j.title ILIKE $1 OR j.description ILIKE $1)
          AND ($2::text IS NULL OR j.location ILIKE $2)
          AND ($3::bool IS NULL OR j.remote = $3)
        ORDER BY j.created_at DESC"#
    );
    sqlx::query_as::<_, JobListing>(&sql)
        .bind(filter.search.map(contains_pattern))
        .bind(filter.location.map(contains_pattern))
        .bind(filter.remote)
        .fetch_all(pool)
        .await
}

pub async fn find_job(pool: &PgPool, job_id: Uuid) -> sqlx::Result<Option<JobRow>> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await
}

pub async fn count_applications(pool: &PgPool, job_id: Uuid) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE job_id = $1")
        .bind(job_id)
        .fetch_one(pool)
        .await
}

/// A company's own postings with application counts, newest first.
pub async fn jobs_for_company(pool: &PgPool, company_id: Uuid) -> sqlx::Result<Vec<JobWithCount>> {
    sqlx::query_as::<_, JobWithCount>(
        r#"
        SELECT j.*,
               (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS application_count
        FROM jobs j
        WHERE j.company_id = $1
        ORDER BY j.created_at DESC
        "#,
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
}

/// Caller guarantees title and description are present.
pub async fn insert_job(pool: &PgPool, company_id: Uuid, fields: &JobFields) -> sqlx::Result<JobRow> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (company_id, title, description, requirements, responsibilities, benefits,
             location, remote, duration, stipend, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(company_id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.requirements)
    .bind(&fields.responsibilities)
    .bind(&fields.benefits)
    .bind(&fields.location)
    .bind(fields.remote.unwrap_or(false))
    .bind(&fields.duration)
    .bind(&fields.stipend)
    .bind(&fields.skills)
    .fetch_one(pool)
    .await
}

pub async fn update_job(pool: &PgPool, job_id: Uuid, fields: &JobFields) -> sqlx::Result<JobRow> {
    sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs SET
            title            = COALESCE($2, title),
            description      = COALESCE($3, description),
            requirements     = $4,
            responsibilities = $5,
            benefits         = $6,
            location         = COALESCE($7, location),
            remote           = COALESCE($8, remote),
            duration         = COALESCE($9, duration),
            stipend          = COALESCE($10, stipend),
            skills           = $11,
            updated_at       = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.requirements)
    .bind(&fields.responsibilities)
    .bind(&fields.benefits)
    .bind(&fields.location)
    .bind(fields.remote)
    .bind(&fields.duration)
    .bind(&fields.stipend)
    .bind(&fields.skills)
    .fetch_one(pool)
    .await
}

pub async fn delete_job(pool: &PgPool, job_id: Uuid) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(job_id)
        .execute(pool)
        .await?;
    Ok(())
}
