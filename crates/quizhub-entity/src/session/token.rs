//! Token value types returned to API clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued bearer token as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerToken {
    /// The raw signed token string.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl BearerToken {
    /// Wrap a signed token string with its expiry.
    pub fn new(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_at,
        }
    }
}
