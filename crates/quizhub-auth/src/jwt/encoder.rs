//! Token issuance with configurable signing and expiry windows.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use quizhub_core::config::AuthConfig;
use quizhub_core::error::AppError;

use crate::directory::UserDirectory;
use crate::error::AuthError;

use super::claims::Claims;

/// A freshly signed token together with the claims that went into it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed compact token string.
    pub token: String,
    /// The claims embedded in the token.
    pub claims: Claims,
}

impl IssuedToken {
    /// Returns the token's expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at()
    }
}

/// Creates signed session tokens.
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Default token TTL in minutes.
    access_ttl_minutes: i64,
    /// Extended "remember me" TTL in days.
    remember_me_ttl_days: i64,
    /// Subject existence check.
    directory: Arc<dyn UserDirectory>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("remember_me_ttl_days", &self.remember_me_ttl_days)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            remember_me_ttl_days: config.remember_me_ttl_days as i64,
            directory,
        }
    }

    /// Issues a signed token for the given subject.
    ///
    /// The subject must resolve to an existing user; issuing fails fast
    /// with [`AuthError::UnknownSubject`] rather than minting a token for
    /// a nonexistent identity. Two calls at the same instant still
    /// produce distinct `jti` values.
    pub async fn issue(
        &self,
        subject: &str,
        remember_me: bool,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let user = self
            .directory
            .find_by_username(subject)
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        let window = if remember_me {
            Duration::days(self.remember_me_ttl_days)
        } else {
            Duration::minutes(self.access_ttl_minutes)
        };

        let claims = Claims {
            sub: user.username,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + window).timestamp(),
            remember_me,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, claims })
    }
}
