use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::application::InternApplication;
use crate::models::intern::{InternCard, InternRow};
use crate::search::contains_pattern;

pub struct NewIntern<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub bio: Option<&'a str>,
    pub skills: &'a [String],
    pub education: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Editable profile fields. `None` leaves the stored value untouched, except
/// `skills`, which is always replaced.
#[derive(Debug, Default)]
pub struct InternChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub resume: Option<String>,
    pub profile_pic: Option<String>,
}

pub async fn insert_intern(
    conn: &mut PgConnection,
    user_id: Uuid,
    intern: NewIntern<'_>,
) -> sqlx::Result<InternRow> {
    sqlx::query_as::<_, InternRow>(
        r#"
        INSERT INTO interns (user_id, first_name, last_name, bio, skills, education, location)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(intern.first_name)
    .bind(intern.last_name)
    .bind(intern.bio)
    .bind(intern.skills)
    .bind(intern.education)
    .bind(intern.location)
    .fetch_one(conn)
    .await
}

pub async fn find_intern_by_user(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Option<InternRow>> {
    sqlx::query_as::<_, InternRow>("SELECT * FROM interns WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_intern(pool: &PgPool, intern_id: Uuid) -> sqlx::Result<Option<InternRow>> {
    sqlx::query_as::<_, InternRow>("SELECT * FROM interns WHERE id = $1")
        .bind(intern_id)
        .fetch_optional(pool)
        .await
}

/// Public browse list, newest first. `search` matches first name, last name
/// or bio; `location` is a substring match. Both are case-insensitive.
pub async fn browse_interns(
    pool: &PgPool,
    search: Option<&str>,
    location: Option<&str>,
) -> sqlx::Result<Vec<InternCard>> {
    sqlx::query_as::<_, InternCard>(
        r#"
        SELECT id, first_name, last_name, bio, skills, education, location, profile_pic, created_at
        FROM interns
        WHERE ($1::text IS NULL
               OR first_name ILIKE $1
               OR last_name ILIKE $1
               OR bio ILIKE $1)
          AND ($2::text IS NULL OR location ILIKE $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(search.map(contains_pattern))
    .bind(location.map(contains_pattern))
    .fetch_all(pool)
    .await
}

pub async fn update_intern(
    pool: &PgPool,
    user_id: Uuid,
    changes: &InternChanges,
) -> sqlx::Result<Option<InternRow>> {
    sqlx::query_as::<_, InternRow>(
        r#"
        UPDATE interns SET
            first_name  = COALESCE($2, first_name),
            last_name   = COALESCE($3, last_name),
            bio         = COALESCE($4, bio),
            skills      = $5,
            education   = COALESCE($6, education),
            experience  = COALESCE($7, experience),
            location    = COALESCE($8, location),
            resume      = COALESCE($9, resume),
            profile_pic = COALESCE($10, profile_pic),
            updated_at  = now()
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&changes.first_name)
    .bind(&changes.last_name)
    .bind(&changes.bio)
    .bind(&changes.skills)
    .bind(&changes.education)
    .bind(&changes.experience)
    .bind(&changes.location)
    .bind(&changes.resume)
    .bind(&changes.profile_pic)
    .fetch_optional(pool)
    .await
}

const INTERN_APPLICATION_SELECT: &str = r#"
    SELECT a.*,
           j.title    AS job_title,
           j.location AS job_location,
           j.company_id,
           c.name     AS company_name,
           c.logo     AS company_logo,
           c.location AS company_location,
           c.industry AS company_industry
    FROM applications a
    JOIN jobs j      ON j.id = a.job_id
    JOIN companies c ON c.id = j.company_id
"#;

/// The intern's applications, newest first.
pub async fn applications_for_intern(
    pool: &PgPool,
    intern_id: Uuid,
) -> sqlx::Result<Vec<InternApplication>> {
    let sql = format!("{INTERN_APPLICATION_SELECT} WHERE a.intern_id = $1 ORDER BY a.applied_at DESC");
    sqlx::query_as::<_, InternApplication>(&sql)
        .bind(intern_id)
        .fetch_all(pool)
        .await
}

pub async fn intern_application(
    pool: &PgPool,
    application_id: Uuid,
) -> sqlx::Result<InternApplication> {
    let sql = format!("{INTERN_APPLICATION_SELECT} WHERE a.id = $1");
    sqlx::query_as::<_, InternApplication>(&sql)
        .bind(application_id)
        .fetch_one(pool)
        .await
}
