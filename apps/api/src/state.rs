use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// HS256 signing and verification keys derived from `JWT_SECRET`.
    pub tokens: TokenKeys,
}
