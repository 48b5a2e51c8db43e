//! Secure link URL layout.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use securedl_core::config::LinkConfig;

/// Characters escaped in the cosmetic filename segment.
const FILENAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// Builds and takes apart `/<link_prefix>/<token_prefix><token>/<filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFormat {
    link_prefix: String,
    token_prefix: String,
}

impl LinkFormat {
    /// Creates the layout from link configuration.
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            link_prefix: config.link_prefix.trim_matches('/').to_string(),
            token_prefix: config.token_prefix.clone(),
        }
    }

    /// Returns the relative link for `token`, named after `resource_identifier`.
    pub fn path(&self, token: &str, resource_identifier: &str) -> String {
        format!(
            "/{}/{}{}/{}",
            self.link_prefix,
            self.token_prefix,
            token,
            cosmetic_filename(resource_identifier)
        )
    }

    /// Finds the token in an absolute or relative secure link.
    ///
    /// Only the segment following `/<link_prefix>/` is considered; the
    /// filename segment is ignored. The prefix may span several segments.
    pub fn extract_token<'a>(&self, url: &'a str) -> Option<&'a str> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let needle = format!("/{}/", self.link_prefix);
        path.match_indices(needle.as_str()).find_map(|(start, _)| {
            path[start + needle.len()..]
                .split('/')
                .next()
                .and_then(|s| s.strip_prefix(self.token_prefix.as_str()))
                .filter(|token| !token.is_empty())
        })
    }

    /// Strips the token prefix from a bare token segment, if present.
    pub fn strip_token_prefix<'a>(&self, segment: &'a str) -> &'a str {
        segment
            .strip_prefix(self.token_prefix.as_str())
            .unwrap_or(segment)
    }
}

/// Last path component of an identifier, percent-encoded for use in a URL.
///
/// Trailing separators are ignored, so `1:/dir/` is named `dir`.
/// Display only; never used to decide which file gets delivered.
pub fn cosmetic_filename(resource_identifier: &str) -> String {
    let name = resource_identifier
        .trim_end_matches(['/', ':'])
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(resource_identifier);
    utf8_percent_encode(name, FILENAME).to_string()
}
