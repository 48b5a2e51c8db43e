//! Signing factory producing secure download links.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use securedl_core::config::{LinkConfig, SigningConfig};
use securedl_core::error::{AppError, ErrorKind};

use super::claims::TokenPayload;
use crate::link::LinkFormat;

/// Immutable builder for one signed link.
///
/// Every `with_*` method consumes the factory and returns a new one, so a
/// configured prototype can be cloned per call without any request state
/// surviving into the next call. A prototype built with [`new`](Self::new)
/// carries no resource, user, or groups.
#[derive(Clone)]
pub struct SecureLinkFactory {
    /// HMAC key, `None` when no secret is configured.
    encoding_key: Option<EncodingKey>,
    /// URL layout.
    format: LinkFormat,
    /// Lifetime used when no timeout is set.
    default_timeout_seconds: i64,
    resource_uri: Option<String>,
    user_id: Option<i64>,
    groups: Vec<i64>,
    timeout_seconds: Option<i64>,
}

impl std::fmt::Debug for SecureLinkFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureLinkFactory")
            .field("format", &self.format)
            .field("default_timeout_seconds", &self.default_timeout_seconds)
            .field("resource_uri", &self.resource_uri)
            .field("user_id", &self.user_id)
            .field("groups", &self.groups)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish_non_exhaustive()
    }
}

impl SecureLinkFactory {
    /// Creates an empty factory from link and signing configuration.
    ///
    /// A missing secret is not rejected here; it surfaces as a
    /// configuration error when a link is requested.
    pub fn new(link: &LinkConfig, signing: &SigningConfig) -> Self {
        let encoding_key = if signing.jwt_secret.is_empty() {
            None
        } else {
            Some(EncodingKey::from_secret(signing.jwt_secret.as_bytes()))
        };

        Self {
            encoding_key,
            format: LinkFormat::new(link),
            default_timeout_seconds: signing.default_timeout_seconds,
            resource_uri: None,
            user_id: None,
            groups: Vec::new(),
            timeout_seconds: None,
        }
    }

    /// Sets the combined identifier of the file to deliver.
    pub fn with_resource_uri(self, resource_uri: impl Into<String>) -> Self {
        Self {
            resource_uri: Some(resource_uri.into()),
            ..self
        }
    }

    /// Binds the link to a frontend user (`0` is the public user).
    pub fn with_user(self, user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..self
        }
    }

    /// Binds the link to frontend user groups.
    pub fn with_groups(self, groups: Vec<i64>) -> Self {
        Self { groups, ..self }
    }

    /// Overrides the default token lifetime.
    pub fn with_timeout(self, timeout_seconds: i64) -> Self {
        Self {
            timeout_seconds: Some(timeout_seconds),
            ..self
        }
    }

    /// Builds the payload that [`url`](Self::url) would sign.
    pub fn payload(&self) -> Result<TokenPayload, AppError> {
        let file = self
            .resource_uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| AppError::validation("A resource identifier is required"))?;

        let timeout = self.timeout_seconds.unwrap_or(self.default_timeout_seconds);
        if timeout <= 0 {
            return Err(AppError::validation(format!(
                "Link timeout must be positive, got {timeout}"
            )));
        }

        let exp = Utc::now()
            .timestamp()
            .checked_add(timeout)
            .ok_or_else(|| AppError::validation(format!("Link timeout {timeout} is too large")))?;

        Ok(TokenPayload {
            file: file.to_string(),
            user: self.user_id,
            groups: self.groups.clone(),
            exp,
        })
    }

    /// Signs the payload and returns the relative link.
    pub fn url(&self) -> Result<String, AppError> {
        let encoding_key = self
            .encoding_key
            .as_ref()
            .ok_or_else(|| AppError::configuration("Signing secret is not configured"))?;

        let payload = self.payload()?;

        let token = encode(&Header::new(Algorithm::HS256), &payload, encoding_key).map_err(|e| {
            AppError::with_source(
                ErrorKind::Signing,
                format!("Failed to encode download token: {e}"),
                e,
            )
        })?;

        Ok(self.format.path(&token, &payload.file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prototype() -> SecureLinkFactory {
        SecureLinkFactory::new(
            &LinkConfig::default(),
            &SigningConfig {
                jwt_secret: "test-secret".to_string(),
                default_timeout_seconds: 3600,
            },
        )
    }

    #[test]
    fn test_url_layout() {
        let url = prototype()
            .with_resource_uri("2:documents/document.pdf")
            .url()
            .expect("url");

        assert!(url.starts_with("/securedl/sdl-"));
        assert!(url.ends_with("/document.pdf"));
    }

    #[test]
    fn test_default_timeout_applies() {
        let before = Utc::now().timestamp();
        let payload = prototype()
            .with_resource_uri("2:a.pdf")
            .payload()
            .expect("payload");

        assert!(payload.exp >= before + 3600);
        assert!(payload.exp <= Utc::now().timestamp() + 3600);
        assert_eq!(payload.user, None);
        assert!(payload.groups.is_empty());
    }

    #[test]
    fn test_builder_does_not_touch_prototype() {
        let prototype = prototype();
        let _bound = prototype
            .clone()
            .with_resource_uri("2:a.pdf")
            .with_user(5)
            .with_groups(vec![1]);

        let payload = prototype
            .clone()
            .with_resource_uri("2:b.pdf")
            .payload()
            .expect("payload");
        assert_eq!(payload.file, "2:b.pdf");
        assert_eq!(payload.user, None);
        assert!(payload.groups.is_empty());
    }

    #[test]
    fn test_missing_secret_fails() {
        let factory = SecureLinkFactory::new(&LinkConfig::default(), &SigningConfig::default())
            .with_resource_uri("2:a.pdf");
        let err = factory.url().expect_err("no secret");
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_invalid_inputs_fail() {
        let err = prototype().url().expect_err("no resource");
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = prototype()
            .with_resource_uri("2:a.pdf")
            .with_timeout(0)
            .url()
            .expect_err("zero timeout");
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
