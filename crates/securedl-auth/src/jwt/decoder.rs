//! Download token inspection.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use securedl_core::config::{LinkConfig, SigningConfig};
use securedl_core::error::AppError;

use super::claims::TokenPayload;
use crate::link::LinkFormat;

/// Verifies download tokens and returns their payload.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// URL layout used to locate the token in a link.
    format: LinkFormat,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .field("format", &self.format)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from link and signing configuration.
    pub fn new(link: &LinkConfig, signing: &SigningConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // clock skew

        Self {
            decoding_key: DecodingKey::from_secret(signing.jwt_secret.as_bytes()),
            validation,
            format: LinkFormat::new(link),
        }
    }

    /// Verifies a bare token (with or without the token prefix).
    pub fn decode(&self, token: &str) -> Result<TokenPayload, AppError> {
        let token = self.format.strip_token_prefix(token.trim());
        let data = decode::<TokenPayload>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Download token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::authentication("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                _ => AppError::authentication(format!("Token validation failed: {e}")),
            },
        )?;

        Ok(data.claims)
    }

    /// Locates the token segment of a secure link and verifies it.
    pub fn decode_url(&self, url: &str) -> Result<TokenPayload, AppError> {
        let token = self
            .format
            .extract_token(url)
            .ok_or_else(|| AppError::not_found(format!("No download token found in '{url}'")))?;
        self.decode(token)
    }
}
