//! Wires configuration into ready-to-use link services.

use std::sync::Arc;

use tracing::info;

use securedl_auth::jwt::{SecureLinkFactory, TokenDecoder};
use securedl_core::config::AppConfig;
use securedl_core::result::AppResult;
use securedl_core::traits::SiteFinder;

use crate::link::SecureLinkGenerator;
use crate::site::{ConfiguredSites, DomainResolver};
use crate::view::{LinkArguments, SecureLinkTagViewHelper, SecureLinkViewHelper};

/// Entry point bundling both templating helpers and token inspection.
#[derive(Debug, Clone)]
pub struct SecureDownloadService {
    generator: Arc<SecureLinkGenerator>,
    link_helper: SecureLinkViewHelper,
    tag_helper: SecureLinkTagViewHelper,
    decoder: TokenDecoder,
}

impl SecureDownloadService {
    /// Builds the services from configuration, resolving sites from `[sites]`.
    pub fn from_config(config: &AppConfig) -> Self {
        let sites = ConfiguredSites::new(&config.sites);
        info!(sites = sites.len(), "Secure download service configured");
        Self::with_sites(config, Arc::new(sites))
    }

    /// Builds the services with a custom site lookup.
    pub fn with_sites(config: &AppConfig, sites: Arc<dyn SiteFinder>) -> Self {
        let prototype = SecureLinkFactory::new(&config.link, &config.signing);
        let generator = Arc::new(SecureLinkGenerator::new(
            prototype,
            DomainResolver::new(sites),
        ));

        Self {
            link_helper: SecureLinkViewHelper::new(generator.clone()),
            tag_helper: SecureLinkTagViewHelper::new(generator.clone()),
            decoder: TokenDecoder::new(&config.link, &config.signing),
            generator,
        }
    }

    /// The shared link generator.
    pub fn generator(&self) -> &Arc<SecureLinkGenerator> {
        &self.generator
    }

    /// Token inspection for generated links.
    pub fn decoder(&self) -> &TokenDecoder {
        &self.decoder
    }

    /// Renders a bare secure URL.
    pub fn link(&self, args: &LinkArguments) -> AppResult<String> {
        self.link_helper.render(args)
    }

    /// Renders an anchor tag around a secure URL.
    pub fn tag(
        &self,
        args: &LinkArguments,
        attributes: &[(String, String)],
        content: Option<&str>,
    ) -> AppResult<String> {
        self.tag_helper.render(args, attributes, content)
    }
}
