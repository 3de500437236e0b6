use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, ApplicationStatus};

pub async fn find_application_for(
    pool: &PgPool,
    job_id: Uuid,
    intern_id: Uuid,
) -> sqlx::Result<Option<ApplicationRow>> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE job_id = $1 AND intern_id = $2",
    )
    .bind(job_id)
    .bind(intern_id)
    .fetch_optional(pool)
    .await
}

/// New applications start out PENDING (column default).
pub async fn insert_application(
    pool: &PgPool,
    job_id: Uuid,
    intern_id: Uuid,
    cover_letter: Option<&str>,
) -> sqlx::Result<ApplicationRow> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (job_id, intern_id, cover_letter)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(intern_id)
    .bind(cover_letter)
    .fetch_one(pool)
    .await
}

/// The user id of the company account that owns the application's job.
pub async fn application_owner(pool: &PgPool, application_id: Uuid) -> sqlx::Result<Option<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT c.user_id
        FROM applications a
        JOIN jobs j      ON j.id = a.job_id
        JOIN companies c ON c.id = j.company_id
        WHERE a.id = $1
        "#,
    )
    .bind(application_id)
    .fetch_optional(pool)
    .await
}

/// Sets the status; stamps `reviewed_at` for any decision, clears it for PENDING.
pub async fn set_status(
    pool: &PgPool,
    application_id: Uuid,
    status: ApplicationStatus,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE applications
        SET status = $2,
            reviewed_at = CASE WHEN $3::bool THEN now() ELSE NULL END
        WHERE id = $1
        "#,
    )
    .bind(application_id)
    .bind(status.as_str())
    .bind(status.is_reviewed())
    .execute(pool)
    .await?;
    Ok(())
}
