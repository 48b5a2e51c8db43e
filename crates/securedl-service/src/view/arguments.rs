//! Arguments accepted by the templating entry points.

use serde_json::{Map, Value};

use securedl_core::error::AppError;
use securedl_core::result::AppResult;
use securedl_core::types::{LinkRequest, ResourceInput, UserRestriction};

/// Templating argument names.
pub const ARG_FILE: &str = "file";
pub const ARG_FEUSER: &str = "feuser";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_SITE_IDENTIFIER: &str = "siteIdentifier";
pub const ARG_GROUPS: &str = "groups";

/// Arguments of a secure link helper call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkArguments {
    /// File handle or identifier; `None` renders nothing.
    pub file: Option<ResourceInput>,
    /// User restriction; absent means unrestricted.
    pub feuser: UserRestriction,
    /// Token lifetime in seconds.
    pub timeout: Option<i64>,
    /// Site whose domain should prefix the link.
    pub site_identifier: Option<String>,
    /// User groups the link is bound to.
    pub groups: Vec<i64>,
}

impl LinkArguments {
    /// Arguments for `file` with everything else unset.
    pub fn for_file(file: impl Into<ResourceInput>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// Coerces a raw argument map as handed over by a template.
    ///
    /// Values that cannot be coerced are rejected with
    /// [`ErrorKind::Validation`](securedl_core::error::ErrorKind::Validation)
    /// before any signing happens. In particular an `feuser` that is neither an
    /// integer nor `"public"` is never narrowed to the public user, since that
    /// would widen who may download.
    pub fn from_map(arguments: &Map<String, Value>) -> AppResult<Self> {
        Ok(Self {
            file: arguments.get(ARG_FILE).and_then(ResourceInput::from_value),
            feuser: UserRestriction::from_value(arguments.get(ARG_FEUSER))?,
            timeout: coerce_timeout(arguments.get(ARG_TIMEOUT))?,
            site_identifier: arguments
                .get(ARG_SITE_IDENTIFIER)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            groups: coerce_groups(arguments.get(ARG_GROUPS))?,
        })
    }

    /// Builds the link request for an already extracted identifier.
    pub fn to_request(&self, resource_identifier: String) -> LinkRequest {
        LinkRequest::new(resource_identifier)
            .with_user(self.feuser)
            .with_groups(self.groups.clone())
            .with_timeout(self.timeout)
            .with_site(self.site_identifier.clone())
    }
}

fn coerce_timeout(value: Option<&Value>) -> AppResult<Option<i64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("timeout is not a number: {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("timeout must be an integer, got \"{s}\""))),
        Some(other) => Err(AppError::validation(format!(
            "timeout must be an integer, got {other}"
        ))),
    }
}

fn coerce_groups(value: Option<&Value>) -> AppResult<Vec<i64>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_i64().ok_or_else(|| invalid_groups(item)))
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i64>().map_err(|_| invalid_groups(part)))
            .collect(),
        Some(Value::Number(n)) => n.as_i64().map(|g| vec![g]).ok_or_else(|| invalid_groups(n)),
        Some(other) => Err(invalid_groups(other)),
    }
}

fn invalid_groups(value: impl std::fmt::Display) -> AppError {
    AppError::validation(format!("groups must be a list of integers, got {value}"))
}
