//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::Value;

use securedl_core::config::AppConfig;
use securedl_core::error::AppError;
use securedl_core::result::AppResult;
use securedl_core::traits::SiteFinder;
use securedl_service::SecureDownloadService;

/// Signing secret used by every test configuration.
pub const SECRET: &str = "integration-test-secret";

/// Test configuration with one resolvable site.
pub fn test_config() -> AppConfig {
    AppConfig::from_toml_str(&format!(
        r#"
        [signing]
        jwt_secret = "{SECRET}"
        default_timeout_seconds = 3600

        [sites.landingpage]
        base = "https://landingpage.example"

        [sites.intranet]
        base = "http://intranet.example:8080/"
        "#
    ))
    .expect("Failed to parse test config")
}

/// Service built from [`test_config`].
pub fn service() -> SecureDownloadService {
    SecureDownloadService::from_config(&test_config())
}

/// Site lookup whose backend is always down.
#[derive(Debug)]
pub struct FailingSites;

impl SiteFinder for FailingSites {
    fn site_base(&self, identifier: &str) -> AppResult<String> {
        Err(AppError::internal(format!("site lookup for '{identifier}' is unavailable")))
    }
}

/// Service whose site lookups always fail.
pub fn service_with_failing_sites() -> SecureDownloadService {
    SecureDownloadService::with_sites(&test_config(), Arc::new(FailingSites))
}

/// Extracts the raw JWT from `/securedl/sdl-<jwt>/<file>`.
pub fn token_of(url: &str) -> &str {
    let start = url.find("/securedl/sdl-").expect("link prefix present") + "/securedl/sdl-".len();
    let rest = &url[start..];
    let end = rest.find('/').expect("filename segment present");
    &rest[..end]
}

/// Decodes the claims of a generated link as raw JSON.
pub fn raw_claims(url: &str) -> Value {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Value>(
        token_of(url),
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &validation,
    )
    .expect("token verifies")
    .claims
}

/// Asserts `url` looks like `<prefix>/securedl/sdl-<token>/<filename>`.
pub fn assert_secure_link(url: &str, prefix: &str, filename: &str) {
    let rest = url
        .strip_prefix(prefix)
        .unwrap_or_else(|| panic!("'{url}' does not start with '{prefix}'"));
    let rest = rest
        .strip_prefix("/securedl/sdl-")
        .unwrap_or_else(|| panic!("'{url}' has no secure link segment"));
    let (token, name) = rest
        .split_once('/')
        .unwrap_or_else(|| panic!("'{url}' has no filename segment"));

    assert!(!token.is_empty(), "empty token in '{url}'");
    assert_eq!(token.split('.').count(), 3, "token in '{url}' is not a JWT");
    assert_eq!(name, filename);
}
