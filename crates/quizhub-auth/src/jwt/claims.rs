//! JWT claims structure embedded in every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload. Immutable once signed; tampering fails signature
/// verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username the token was issued to.
    pub sub: String,
    /// JWT ID, unique per issuance; the key for individual revocation.
    pub jti: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Whether the login requested an extended session.
    pub remember_me: bool,
}

impl Claims {
    /// Returns the issue time as a `DateTime<Utc>`.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired at the given instant.
    /// A token is still valid at the exact expiry second.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(iat: i64, exp: i64) -> Claims {
        Claims {
            sub: "alice".to_string(),
            jti: Uuid::new_v4(),
            iat,
            exp,
            remember_me: false,
        }
    }

    #[test]
    fn test_not_expired_at_exact_expiry_second() {
        let c = claims(0, 100);
        let at_exp = DateTime::from_timestamp(100, 0).unwrap();
        assert!(!c.is_expired(at_exp));
        let past_exp = DateTime::from_timestamp(101, 0).unwrap();
        assert!(c.is_expired(past_exp));
    }
}
