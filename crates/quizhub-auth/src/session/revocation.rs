//! Logout orchestration: single-token revocation, mass revocation by
//! blocklist date, and enumeration-based bulk revocation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::jwt::TokenValidator;
use crate::revocation::RevocationStore;

/// What a logout call actually did. Every variant is a success: the
/// caller wanted the session ended, and in all of them it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// A revocation record was written.
    Revoked,
    /// The token was already revoked; `revoked_at` was refreshed.
    AlreadyRevoked,
    /// The token had already expired, so no record is needed.
    Expired,
    /// The token's subject no longer exists; nothing to do.
    UnknownSubject,
}

/// Drives both revocation strategies: the per-token revocation list and
/// the per-user blocklist date.
pub struct SessionRevocationService {
    /// Signature-only token inspection.
    validator: Arc<TokenValidator>,
    /// Subject resolution and blocklist date updates.
    directory: Arc<dyn UserDirectory>,
    /// Revocation record persistence.
    revocations: Arc<dyn RevocationStore>,
}

impl std::fmt::Debug for SessionRevocationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRevocationService").finish()
    }
}

impl SessionRevocationService {
    /// Creates a new revocation service.
    pub fn new(
        validator: Arc<TokenValidator>,
        directory: Arc<dyn UserDirectory>,
        revocations: Arc<dyn RevocationStore>,
    ) -> Self {
        Self {
            validator,
            directory,
            revocations,
        }
    }

    /// Revokes a single token.
    ///
    /// The token is inspected only far enough to extract `jti`, `sub`,
    /// and `exp`: an expired token can still be "revoked" (a no-op), and
    /// revoking twice refreshes the record instead of erroring. Only a
    /// token that fails the signature check is rejected.
    pub async fn logout(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<LogoutOutcome, AuthError> {
        let claims = self.validator.peek(token)?;

        if claims.is_expired(now) {
            info!(jti = %claims.jti, "Logout of an already-expired token; nothing to revoke");
            return Ok(LogoutOutcome::Expired);
        }

        let Some(user) = self.directory.find_by_username(&claims.sub).await? else {
            warn!(subject = %claims.sub, "Logout for a subject that no longer exists");
            return Ok(LogoutOutcome::UnknownSubject);
        };

        let already_revoked = self.revocations.is_revoked(claims.jti).await?;
        self.revocations
            .record_revocation(claims.jti, token, user.id, claims.expires_at(), now)
            .await?;

        if already_revoked {
            info!(jti = %claims.jti, "Token was already revoked; record refreshed");
            Ok(LogoutOutcome::AlreadyRevoked)
        } else {
            info!(jti = %claims.jti, user_id = %user.id, "Token revoked");
            Ok(LogoutOutcome::Revoked)
        }
    }

    /// Ends every session for a user by advancing the blocklist date.
    ///
    /// One atomic UPDATE; from this instant every token with
    /// `iat < now` fails validation, including tokens this process has
    /// never seen (long-lived remember-me tokens from other devices).
    pub async fn logout_all(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<(), AuthError> {
        self.directory
            .set_token_blocklist_date(user_id, Some(now))
            .await?;
        info!(%user_id, at = %now, "All sessions revoked via blocklist date");
        Ok(())
    }

    /// Enumeration-based bulk revocation for a known token set.
    ///
    /// Revokes each token individually by `jti`, skipping malformed or
    /// already-expired entries rather than aborting the batch. Returns
    /// the number of tokens revoked.
    pub async fn revoke_all_tracked(
        &self,
        user_id: Uuid,
        active_tokens: &[String],
        now: DateTime<Utc>,
    ) -> Result<u32, AuthError> {
        let mut revoked = 0u32;

        for token in active_tokens {
            let claims = match self.validator.peek(token) {
                Ok(claims) => claims,
                Err(_) => {
                    warn!("Skipping malformed token in bulk revocation");
                    continue;
                }
            };

            if claims.is_expired(now) {
                continue;
            }

            self.revocations
                .record_revocation(claims.jti, token, user_id, claims.expires_at(), now)
                .await?;
            revoked += 1;
        }

        info!(%user_id, revoked, "Bulk-revoked tracked tokens");
        Ok(revoked)
    }
}
