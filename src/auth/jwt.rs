//! Session token issue and validation.

use crate::error::{AppError, AppResult};
use crate::models::SanitizedUser;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token claims: the sanitized profile plus issue/expiry timestamps.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: SanitizedUser,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
    expires_in: Duration,
}

impl JwtSecret {
    pub fn new(secret: String, expires_in: Duration) -> Self {
        Self { secret, expires_in }
    }

    pub fn issue(&self, user: &SanitizedUser) -> AppResult<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.expires_in)
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("token expiry overflow")))?;
        let claims = Claims {
            user: user.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Jwt(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(data.claims)
    }
}
