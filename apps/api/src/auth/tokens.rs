use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserType;

/// JWT payload. Field names match the tokens the web client already holds,
/// so existing sessions stay valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub user_type: UserType,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 keys plus token lifetime. Cheap to clone into `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    pub fn issue(
        &self,
        user_id: Uuid,
        user_type: UserType,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            user_type,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verifies signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_verifies() {
        let keys = TokenKeys::new("test-secret", 7);
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id, UserType::Intern).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.user_type, UserType::Intern);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenKeys::new("secret-a", 7)
            .issue(Uuid::new_v4(), UserType::Company)
            .unwrap();
        assert!(TokenKeys::new("secret-b", 7).verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Past the default 60s leeway
        let keys = TokenKeys::new("test-secret", -1);
        let token = keys.issue(Uuid::new_v4(), UserType::Company).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_claims_use_camel_case() {
        let claims = Claims {
            user_id: Uuid::nil(),
            user_type: UserType::Company,
            iat: 0,
            exp: 1,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["userType"], "COMPANY");
        assert!(value.get("userId").is_some());
    }
}
