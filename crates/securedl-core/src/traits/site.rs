//! Site lookup trait used to make relative links absolute.

use crate::result::AppResult;

/// Resolves a site identifier to the site's configured base URL.
///
/// Lookups are expected to be in-memory; implementations must not block.
pub trait SiteFinder: Send + Sync + std::fmt::Debug + 'static {
    /// Return the base URL (e.g. `https://landingpage.example/`) for `identifier`.
    ///
    /// Unknown identifiers are reported as [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound).
    fn site_base(&self, identifier: &str) -> AppResult<String>;
}
