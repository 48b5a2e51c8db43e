//! Frontend user restriction carried by a secure link.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Literal accepted in place of user ID `0`.
pub const PUBLIC_USER: &str = "public";

/// Who may download through a link.
///
/// `Unrestricted` and `Public` are distinct: the former sets no user on the
/// token at all, the latter binds the token to user ID `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRestriction {
    /// No user is bound to the token.
    #[default]
    Unrestricted,
    /// Bound to the public sentinel user ID `0`.
    Public,
    /// Bound to a specific frontend user.
    User(i64),
}

impl UserRestriction {
    /// Returns the user ID forwarded to the signing factory, if any.
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::Unrestricted => None,
            Self::Public => Some(0),
            Self::User(id) => Some(*id),
        }
    }

    /// Coerces a templating `feuser` argument.
    ///
    /// Accepts integers, integer strings, and the literal `"public"`. A missing
    /// or `null` value means unrestricted.
    pub fn from_value(value: Option<&Value>) -> Result<Self, AppError> {
        match value {
            None | Some(Value::Null) => Ok(Self::Unrestricted),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Self::from)
                .ok_or_else(|| AppError::validation(format!("feuser is not an integer: {n}"))),
            Some(Value::String(s)) => s.parse(),
            Some(other) => Err(AppError::validation(format!(
                "feuser must be an integer or \"{PUBLIC_USER}\", got {other}"
            ))),
        }
    }
}

impl From<i64> for UserRestriction {
    /// `0` is the public sentinel.
    fn from(id: i64) -> Self {
        if id == 0 { Self::Public } else { Self::User(id) }
    }
}

impl std::str::FromStr for UserRestriction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == PUBLIC_USER {
            return Ok(Self::Public);
        }
        trimmed.parse::<i64>().map(Self::from).map_err(|_| {
            AppError::validation(format!(
                "feuser must be an integer or \"{PUBLIC_USER}\", got \"{s}\""
            ))
        })
    }
}
