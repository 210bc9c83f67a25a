//! Authentication and token configuration.

use serde::{Deserialize, Serialize};

/// Authentication, token, and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Default access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Extended token TTL in days, applied when a login requests "remember me".
    #[serde(default = "default_remember_me_ttl")]
    pub remember_me_ttl_days: u64,
    /// Minimum password length for new accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Interval in minutes between sweeps of expired revocation records.
    #[serde(default = "default_sweep_interval")]
    pub revocation_sweep_interval_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            remember_me_ttl_days: default_remember_me_ttl(),
            password_min_length: default_password_min(),
            revocation_sweep_interval_minutes: default_sweep_interval(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_remember_me_ttl() -> u64 {
    30
}

fn default_password_min() -> usize {
    8
}

fn default_sweep_interval() -> u64 {
    60
}
