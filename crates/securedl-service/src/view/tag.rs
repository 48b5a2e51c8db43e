//! Entry point returning an anchor tag around a secure URL.

use std::sync::Arc;

use securedl_core::result::AppResult;

use super::arguments::LinkArguments;
use super::link::SecureLinkViewHelper;
use crate::link::SecureLinkGenerator;
use crate::tag::TagRenderer;

/// Renders `<a href="...">` for a file, or an empty string when there is no file.
#[derive(Debug, Clone)]
pub struct SecureLinkTagViewHelper {
    link: SecureLinkViewHelper,
    renderer: TagRenderer,
}

impl SecureLinkTagViewHelper {
    /// Creates a new helper sharing `generator`.
    pub fn new(generator: Arc<SecureLinkGenerator>) -> Self {
        Self {
            link: SecureLinkViewHelper::new(generator),
            renderer: TagRenderer::new(),
        }
    }

    /// Returns the rendered tag, or `""` when `args.file` yields no identifier.
    pub fn render(
        &self,
        args: &LinkArguments,
        attributes: &[(String, String)],
        content: Option<&str>,
    ) -> AppResult<String> {
        let url = self.link.render(args)?;
        if url.is_empty() {
            return Ok(url);
        }
        Ok(self.renderer.render(&url, attributes, content))
    }
}
