use anyhow::{Context, Result};

/// Matches the cost used when the existing rows were hashed.
pub const BCRYPT_COST: u32 = 10;

/// Hashes on the blocking pool; bcrypt is deliberately slow.
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .context("Password hashing task panicked")?
        .context("Failed to hash password")
}

pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("Password verification task panicked")?;

    // A malformed stored hash is a failed login, not a server error.
    Ok(outcome.unwrap_or(false))
}
