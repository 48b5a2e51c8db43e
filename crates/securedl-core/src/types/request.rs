//! Per-call link request value object.

use serde::{Deserialize, Serialize};

use super::user::UserRestriction;

/// Everything needed to generate one secure link.
///
/// Built fresh for every call and dropped once the link is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    /// Combined identifier (`2:documents/report.pdf`) or path of the file.
    pub resource_identifier: String,
    /// Frontend user the link is bound to; `Some(0)` is the public user.
    pub user_id: Option<i64>,
    /// Frontend user groups the link is bound to.
    #[serde(default)]
    pub groups: Vec<i64>,
    /// Token lifetime in seconds; `None` uses the signer's default.
    pub timeout_seconds: Option<i64>,
    /// Site whose domain should prefix the link.
    pub site_identifier: Option<String>,
}

impl LinkRequest {
    /// Creates an unrestricted request for `resource_identifier`.
    pub fn new(resource_identifier: impl Into<String>) -> Self {
        Self {
            resource_identifier: resource_identifier.into(),
            user_id: None,
            groups: Vec::new(),
            timeout_seconds: None,
            site_identifier: None,
        }
    }

    /// Binds the request to a user restriction.
    pub fn with_user(mut self, restriction: UserRestriction) -> Self {
        self.user_id = restriction.user_id();
        self
    }

    /// Binds the request to user groups.
    pub fn with_groups(mut self, groups: Vec<i64>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the token lifetime.
    pub fn with_timeout(mut self, timeout_seconds: Option<i64>) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Requests an absolute link for the given site.
    pub fn with_site(mut self, site_identifier: Option<String>) -> Self {
        self.site_identifier = site_identifier;
        self
    }
}
