//! Payload embedded in every download token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT payload of a secure download link.
///
/// The delivery side trusts only these fields; the filename segment of the
/// URL is never consulted. No other claims are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Combined identifier of the file to deliver.
    pub file: String,
    /// Frontend user the link is bound to. Omitted when unrestricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<i64>,
    /// Frontend user groups the link is bound to.
    #[serde(default)]
    pub groups: Vec<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenPayload {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
