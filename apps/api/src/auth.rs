//! Password hashing and JWT session tokens.
//!
//! Standard HS256 bearer tokens; `AuthUser` is the extractor handlers take to
//! require an authenticated, active user.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to encode JWT: {0}")]
    JwtEncode(#[from] jsonwebtoken::errors::Error),

    #[error("session token expired")]
    TokenExpired,

    #[error("invalid session token")]
    InvalidToken,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    /// Expiration timestamp (Unix epoch).
    pub exp: u64,
    /// Issued-at timestamp (Unix epoch).
    pub iat: u64,
}

/// Token signing/verification keys, derived from the configured secret once
/// at startup.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_expiry_secs: u64,
}

impl AuthKeys {
    pub fn new(jwt_secret: &str, token_expiry_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
            token_expiry_secs,
        }
    }

    /// Issues an access token for the given user.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: user_id,
            exp: now + self.token_expiry_secs,
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Validates a token and returns its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;
        Ok(data.claims)
    }
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

/// Extractor for the authenticated user. Reads the `Authorization: Bearer`
/// header, validates the token, and loads the (active) user row.
pub struct AuthUser(pub UserRow);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = state
            .auth
            .verify_token(token)
            .map_err(|_| AppError::Unauthorized)?;

        let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(claims.sub)
            .fetch_optional(&state.db)
            .await?;

        match user {
            Some(user) if user.is_active => Ok(AuthUser(user)),
            _ => Err(AppError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let keys = AuthKeys::new("test-secret", 3600);
        let user_id = Uuid::new_v4();
        let token = keys.issue_token(user_id).unwrap();
        let claims = keys.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let keys = AuthKeys::new("test-secret", 3600);
        let other = AuthKeys::new("other-secret", 3600);
        let token = keys.issue_token(Uuid::new_v4()).unwrap();
        assert!(matches!(
            other.verify_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let keys = AuthKeys::new("test-secret", 3600);
        assert!(keys.verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hashed = hash_password("hunter2hunter2").unwrap();
        assert!(verify_password("hunter2hunter2", &hashed));
        assert!(!verify_password("wrong-password", &hashed));
    }
}
