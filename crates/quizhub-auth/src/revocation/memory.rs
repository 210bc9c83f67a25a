//! In-memory revocation store using a Tokio mutex for single-node use.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_core::result::AppResult;
use quizhub_entity::session::RevokedToken;

use super::store::RevocationStore;

/// In-memory revocation store keyed by `jti`.
///
/// Suitable for tests and single-node development; production wiring
/// uses [`super::PgRevocationStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryRevocationStore {
    /// Protected record map.
    records: Arc<tokio::sync::Mutex<HashMap<Uuid, RevokedToken>>>,
}

impl MemoryRevocationStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn record_revocation(
        &self,
        jti: Uuid,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<RevokedToken> {
        let mut records = self.records.lock().await;
        let record = records
            .entry(jti)
            .and_modify(|r| r.revoked_at = now)
            .or_insert_with(|| RevokedToken {
                id: Uuid::new_v4(),
                jti,
                token: token.to_string(),
                user_id,
                revoked_at: now,
                expires_at,
            });
        Ok(record.clone())
    }

    async fn is_revoked(&self, jti: Uuid) -> AppResult<bool> {
        Ok(self.records.lock().await.contains_key(&jti))
    }

    async fn list_active(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Vec<RevokedToken>> {
        let records = self.records.lock().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id && r.is_live(now))
            .cloned()
            .collect())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, r| r.expires_at > now);
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_revoke_refreshes_revoked_at() {
        let store = MemoryRevocationStore::new();
        let jti = Uuid::new_v4();
        let user = Uuid::new_v4();

        store
            .record_revocation(jti, "tok", user, at(1000), at(10))
            .await
            .unwrap();
        let second = store
            .record_revocation(jti, "tok", user, at(1000), at(20))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(second.revoked_at, at(20));
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired_records() {
        let store = MemoryRevocationStore::new();
        let user = Uuid::new_v4();
        store
            .record_revocation(Uuid::new_v4(), "a", user, at(100), at(0))
            .await
            .unwrap();
        store
            .record_revocation(Uuid::new_v4(), "b", user, at(300), at(0))
            .await
            .unwrap();

        let removed = store.delete_expired(at(200)).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.list_active(user, at(200)).await.unwrap().len(), 1);
    }
}
