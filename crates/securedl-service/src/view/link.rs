//! Entry point returning a bare secure URL.

use std::sync::Arc;

use securedl_core::result::AppResult;
use securedl_core::types::LinkRequest;

use super::arguments::LinkArguments;
use crate::link::SecureLinkGenerator;
use crate::resource::ResourceIdentifierExtractor;

/// Renders the secure URL for a file, or an empty string when there is no file.
#[derive(Debug, Clone)]
pub struct SecureLinkViewHelper {
    extractor: ResourceIdentifierExtractor,
    generator: Arc<SecureLinkGenerator>,
}

impl SecureLinkViewHelper {
    /// Creates a new helper sharing `generator`.
    pub fn new(generator: Arc<SecureLinkGenerator>) -> Self {
        Self {
            extractor: ResourceIdentifierExtractor::new(),
            generator,
        }
    }

    /// Returns the URL, or `""` when `args.file` yields no identifier.
    pub fn render(&self, args: &LinkArguments) -> AppResult<String> {
        match self.request(args) {
            Some(request) => self.generator.create_link(&request),
            None => Ok(String::new()),
        }
    }

    /// Normalizes the arguments into a link request.
    fn request(&self, args: &LinkArguments) -> Option<LinkRequest> {
        self.extractor
            .extract(args.file.as_ref())
            .filter(|identifier| !identifier.is_empty())
            .map(|identifier| args.to_request(identifier))
    }
}
