//! Revoked token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A token that has been explicitly revoked before its natural expiry.
///
/// Rows become worthless once `expires_at` passes (the token is then
/// unusable on expiry grounds alone) and are deleted by the retention
/// sweep.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevokedToken {
    /// Unique row identifier.
    pub id: Uuid,
    /// The token's unique JWT ID claim.
    pub jti: Uuid,
    /// The full token string, for exact-match lookups.
    pub token: String,
    /// The user the token was issued to.
    pub user_id: Uuid,
    /// When the token was revoked. Refreshed on a duplicate revoke.
    pub revoked_at: DateTime<Utc>,
    /// The token's own expiry, copied from its `exp` claim at revocation.
    pub expires_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Whether this record still matters at the given instant.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
