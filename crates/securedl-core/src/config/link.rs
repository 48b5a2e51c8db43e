//! Secure link URL layout configuration.

use serde::{Deserialize, Serialize};

/// Controls the path segments of generated links:
/// `/<link_prefix>/<token_prefix><token>/<filename>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Leading path of every secure link; may span several segments.
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,
    /// Marker prepended to the token segment.
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            link_prefix: default_link_prefix(),
            token_prefix: default_token_prefix(),
        }
    }
}

fn default_link_prefix() -> String {
    "securedl".to_string()
}

fn default_token_prefix() -> String {
    "sdl-".to_string()
}
