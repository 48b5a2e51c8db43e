//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HMAC-signed download tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Must be set.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime applied when a caller passes no timeout.
    #[serde(default = "default_timeout")]
    pub default_timeout_seconds: i64,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            default_timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> i64 {
    3600
}
