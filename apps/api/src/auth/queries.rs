use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::user::{AccountInfo, UserRow, UserType};

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_user(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn account_info(pool: &PgPool, user_id: Uuid) -> sqlx::Result<AccountInfo> {
    sqlx::query_as::<_, AccountInfo>("SELECT email, created_at FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

/// Inserts the login row. Runs inside the registration transaction so the
/// user never exists without its company or intern profile.
pub async fn insert_user(
    conn: &mut PgConnection,
    email: &str,
    password_hash: &str,
    user_type: UserType,
) -> sqlx::Result<UserRow> {
    sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (email, password, user_type) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(email)
    .bind(password_hash)
    .bind(user_type.as_str())
    .fetch_one(conn)
    .await
}
