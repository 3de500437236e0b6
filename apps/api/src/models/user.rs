use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    Company,
    Intern,
}

impl UserType {
    pub const fn as_str(self) -> &'static str {
        match self {
            UserType::Company => "COMPANY",
            UserType::Intern => "INTERN",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPANY" => Ok(UserType::Company),
            "INTERN" => Ok(UserType::Intern),
            other => Err(anyhow::anyhow!("Unknown user type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    /// bcrypt hash
    #[serde(skip_serializing)]
    pub password: String,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

/// Login email and signup date, attached to a user's own profile views.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub email: String,
    pub created_at: DateTime<Utc>,
}
