//! Revoked token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use quizhub_core::error::{AppError, ErrorKind};
use quizhub_core::result::AppResult;
use quizhub_entity::session::RevokedToken;

/// Repository for the revoked tokens table.
#[derive(Debug, Clone)]
pub struct RevokedTokenRepository {
    pool: PgPool,
}

impl RevokedTokenRepository {
    /// Create a new revoked token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a revocation record, or refresh `revoked_at` if the `jti`
    /// is already present. A single upsert statement keeps duplicate
    /// revokes idempotent under concurrency.
    pub async fn upsert(
        &self,
        jti: Uuid,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        revoked_at: DateTime<Utc>,
    ) -> AppResult<RevokedToken> {
        sqlx::query_as::<_, RevokedToken>(
            "INSERT INTO revoked_tokens (id, jti, token, user_id, revoked_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (jti) DO UPDATE SET revoked_at = EXCLUDED.revoked_at \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(jti)
        .bind(token)
        .bind(user_id)
        .bind(revoked_at)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record revocation", e))
    }

    /// Point lookup by JWT ID.
    pub async fn exists_by_jti(&self, jti: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE jti = $1)")
            .bind(jti)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up revocation", e)
            })
    }

    /// Records for a user whose underlying token has not yet expired.
    pub async fn find_active_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<RevokedToken>> {
        sqlx::query_as::<_, RevokedToken>(
            "SELECT * FROM revoked_tokens WHERE user_id = $1 AND expires_at > $2 \
             ORDER BY revoked_at DESC",
        )
        .bind(user_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active revocations", e)
        })
    }

    /// Delete records whose token has expired on its own. Storage hygiene
    /// only; an expired token is already rejected before the revocation
    /// lookup.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to sweep revocations", e)
            })?;
        Ok(result.rows_affected())
    }
}
