//! Builds signed download links from link requests.

use tracing::debug;

use securedl_auth::jwt::SecureLinkFactory;
use securedl_core::result::AppResult;
use securedl_core::types::LinkRequest;

use crate::site::DomainResolver;

/// Generates secure links, one fresh signing factory per call.
#[derive(Debug, Clone)]
pub struct SecureLinkGenerator {
    /// Unconfigured factory cloned for every link. Never mutated.
    prototype: SecureLinkFactory,
    /// Domain prefixing for site-bound links.
    domains: DomainResolver,
}

impl SecureLinkGenerator {
    /// Creates a new generator.
    pub fn new(prototype: SecureLinkFactory, domains: DomainResolver) -> Self {
        Self { prototype, domains }
    }

    /// Generates the link for `request`.
    ///
    /// Factory errors are returned as-is; there is no retry and no fallback URL.
    pub fn create_link(&self, request: &LinkRequest) -> AppResult<String> {
        let mut factory = self
            .prototype
            .clone()
            .with_resource_uri(request.resource_identifier.as_str());

        if let Some(user_id) = request.user_id {
            factory = factory.with_user(user_id);
        }
        if !request.groups.is_empty() {
            factory = factory.with_groups(request.groups.clone());
        }
        if let Some(timeout) = request.timeout_seconds {
            factory = factory.with_timeout(timeout);
        }

        let url = factory.url()?;

        debug!(
            resource = %request.resource_identifier,
            user_id = ?request.user_id,
            groups = ?request.groups,
            timeout_seconds = ?request.timeout_seconds,
            site = ?request.site_identifier,
            "Secure link created"
        );

        Ok(match request.site_identifier.as_deref() {
            Some(site) => self.domains.prepend_domain(&url, site),
            None => url,
        })
    }

    /// Positional form of [`create_link`](Self::create_link).
    pub fn create(
        &self,
        resource_identifier: &str,
        user_id: Option<i64>,
        timeout_seconds: Option<i64>,
        site_identifier: Option<&str>,
    ) -> AppResult<String> {
        let mut request = LinkRequest::new(resource_identifier)
            .with_timeout(timeout_seconds)
            .with_site(site_identifier.map(str::to_string));
        request.user_id = user_id;
        self.create_link(&request)
    }
}
