//! The revoked-token store abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_core::result::AppResult;
use quizhub_entity::session::RevokedToken;

/// Persistent store of revoked-token records.
///
/// Revocation is idempotent by construction: recording the same `jti`
/// twice refreshes `revoked_at` instead of erroring.
#[async_trait]
pub trait RevocationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Record a revocation, refreshing `revoked_at` on a duplicate `jti`.
    async fn record_revocation(
        &self,
        jti: Uuid,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<RevokedToken>;

    /// Whether the given `jti` has been revoked.
    async fn is_revoked(&self, jti: Uuid) -> AppResult<bool>;

    /// Records for a user whose underlying token is still live
    /// (`expires_at > now`).
    async fn list_active(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Vec<RevokedToken>>;

    /// Drop records whose token has expired on its own. Returns the
    /// number of records removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}
