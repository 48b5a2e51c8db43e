//! Prefixes relative links with a site's domain.

use std::sync::Arc;

use tracing::warn;
use url::Url;

use securedl_core::error::AppError;
use securedl_core::result::AppResult;
use securedl_core::traits::SiteFinder;

/// Turns relative secure links into absolute ones for a given site.
///
/// Used where no HTTP request is around to supply a host, e.g. when links
/// are rendered into mails or by scheduled jobs.
#[derive(Debug, Clone)]
pub struct DomainResolver {
    /// Site lookup.
    sites: Arc<dyn SiteFinder>,
}

impl DomainResolver {
    /// Creates a new resolver.
    pub fn new(sites: Arc<dyn SiteFinder>) -> Self {
        Self { sites }
    }

    /// Prefixes `url` with the domain of `site_identifier`.
    ///
    /// Never fails: if the site cannot be resolved the relative `url` is
    /// returned unchanged.
    pub fn prepend_domain(&self, url: &str, site_identifier: &str) -> String {
        match self.site_origin(site_identifier) {
            Ok(origin) => join(&origin, url),
            Err(e) => {
                warn!(
                    site = %site_identifier,
                    error = %e,
                    "Could not resolve site domain, returning relative link"
                );
                url.to_string()
            }
        }
    }

    /// Builds `scheme://host[:port]` from the site's base URL.
    fn site_origin(&self, site_identifier: &str) -> AppResult<String> {
        let base = self.sites.site_base(site_identifier)?;
        let parsed = Url::parse(&base).map_err(|e| {
            AppError::configuration(format!(
                "Invalid base URL '{base}' for site '{site_identifier}': {e}"
            ))
        })?;
        let host = parsed.host_str().ok_or_else(|| {
            AppError::configuration(format!(
                "Base URL '{base}' for site '{site_identifier}' has no host"
            ))
        })?;

        Ok(match parsed.port() {
            Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
            None => format!("{}://{}", parsed.scheme(), host),
        })
    }
}

/// Joins an origin and a path with exactly one slash between them.
fn join(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
