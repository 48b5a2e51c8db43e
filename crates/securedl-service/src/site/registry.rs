//! Site lookup backed by the `[sites]` configuration table.

use std::collections::HashMap;

use securedl_core::config::SiteConfig;
use securedl_core::error::AppError;
use securedl_core::result::AppResult;
use securedl_core::traits::SiteFinder;

/// Immutable map of site identifier to base URL.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredSites {
    bases: HashMap<String, String>,
}

impl ConfiguredSites {
    /// Creates the registry from configured sites.
    pub fn new(sites: &HashMap<String, SiteConfig>) -> Self {
        Self {
            bases: sites
                .iter()
                .map(|(identifier, site)| (identifier.clone(), site.base.clone()))
                .collect(),
        }
    }

    /// Number of known sites.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Whether no site is configured.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl SiteFinder for ConfiguredSites {
    fn site_base(&self, identifier: &str) -> AppResult<String> {
        self.bases
            .get(identifier)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Site '{identifier}' is not configured")))
    }
}

impl FromIterator<(String, String)> for ConfiguredSites {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            bases: iter.into_iter().collect(),
        }
    }
}
