//! Site configuration.

use serde::{Deserialize, Serialize};

/// A site that links can be made absolute for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the site, e.g. `https://landingpage.example/`.
    pub base: String,
}
