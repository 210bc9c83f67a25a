//! Token validation: signature, expiry, and both revocation checks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use quizhub_core::config::AuthConfig;

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::revocation::RevocationStore;

use super::claims::Claims;

/// Validates session tokens.
///
/// Expiry is checked manually against a caller-supplied clock instant
/// rather than by the JWT library, so every comparison in a validation
/// pass uses the same `now`.
pub struct TokenValidator {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature/structure validation configuration.
    validation: Validation,
    /// Subject resolution and blocklist date lookup.
    directory: Arc<dyn UserDirectory>,
    /// Per-token revocation lookups.
    revocations: Arc<dyn RevocationStore>,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(
        config: &AuthConfig,
        directory: Arc<dyn UserDirectory>,
        revocations: Arc<dyn RevocationStore>,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the caller's `now`, not the decode
        // wall clock, and must be reported before revocation.
        validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            directory,
            revocations,
        }
    }

    /// Runs the full validation pass and returns the parsed claims.
    ///
    /// Checks, in order:
    /// 1. Signature and structure
    /// 2. Expiry (an expired token reports `Expired` even if it is also
    ///    revoked)
    /// 3. Subject still resolves to a user
    /// 4. The `jti` is not in the revocation store
    /// 5. The token was not issued before the user's blocklist date
    ///
    /// Never mutates state; safe to run with unlimited parallelism.
    pub async fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = self.peek(token)?;

        if claims.is_expired(now) {
            return Err(AuthError::Expired);
        }

        let user = self
            .directory
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        if self.revocations.is_revoked(claims.jti).await? {
            return Err(AuthError::Revoked);
        }

        if let Some(blocklist_date) = user.token_blocklist_date {
            if claims.iat < blocklist_date.timestamp() {
                return Err(AuthError::Revoked);
            }
        }

        Ok(claims)
    }

    /// Verifies only the signature and structure, returning the claims.
    ///
    /// Expiry is deliberately not enforced: logout uses this to extract
    /// `jti`/`sub`/`exp` from tokens that may already have expired.
    pub fn peek(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "Token failed signature/structure check");
                AuthError::Malformed
            })?;
        Ok(token_data.claims)
    }
}
