//! Authentication error taxonomy.
//!
//! Token validation failures are tagged so that callers can distinguish
//! "log in again" (`Expired`) from "your session was forcibly ended"
//! (`Revoked`) without string matching. The API layer decides what each
//! variant looks like to the outside world.

use chrono::{DateTime, Utc};
use thiserror::Error;

use quizhub_core::error::AppError;

/// Errors surfaced by the token lifecycle and login/logout flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token is structurally invalid or carries a bad signature.
    #[error("token is malformed or has an invalid signature")]
    Malformed,

    /// The token's expiry has passed. Reported in preference to
    /// revocation: an expired token is "expired" even if it was also
    /// revoked.
    #[error("token has expired")]
    Expired,

    /// The token was revoked, either individually or by a mass logout.
    #[error("token has been revoked")]
    Revoked,

    /// The token's subject no longer resolves to a user. Rendered
    /// identically to `Revoked` at the API boundary so that account
    /// existence does not leak.
    #[error("token subject no longer exists")]
    UnknownSubject,

    /// Login is blocked until a future-dated blocklist date elapses.
    #[error("all sessions are suspended until {until}")]
    SessionsSuspended {
        /// The instant the suspension lifts.
        until: DateTime<Utc>,
    },

    /// Wrong username or password, or an inactive account. Deliberately
    /// indistinguishable to the caller.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// An underlying storage failure. Propagated, never swallowed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    /// Whether this failure is the client's fault (as opposed to an
    /// internal storage error).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_are_not_client_errors() {
        let err = AuthError::from(AppError::database("connection reset"));
        assert!(!err.is_client_error());
        assert!(AuthError::Expired.is_client_error());
    }
}
