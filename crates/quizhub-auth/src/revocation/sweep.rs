//! Retention sweep for naturally expired revocation records.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use quizhub_core::error::AppError;

use super::store::RevocationStore;

/// Periodically drops revocation records whose token has expired on its
/// own. Storage hygiene only: expiry is checked before the revocation
/// lookup, so stale records never affect validation results.
#[derive(Clone)]
pub struct RevocationSweep {
    /// Store to sweep.
    revocations: Arc<dyn RevocationStore>,
}

impl std::fmt::Debug for RevocationSweep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationSweep").finish()
    }
}

impl RevocationSweep {
    /// Creates a new sweep handler.
    pub fn new(revocations: Arc<dyn RevocationStore>) -> Self {
        Self { revocations }
    }

    /// Runs one sweep cycle, returning the number of records removed.
    pub async fn run_sweep(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let removed = self.revocations.delete_expired(now).await?;
        if removed > 0 {
            info!(removed, "Swept expired revocation records");
        }
        Ok(removed)
    }
}
