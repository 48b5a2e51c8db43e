//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod link;
pub mod logging;
pub mod signing;
pub mod site;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use self::link::LinkConfig;
pub use self::logging::LoggingConfig;
pub use self::signing::SigningConfig;
pub use self::site::SiteConfig;

use crate::error::AppError;

/// Base configuration file merged underneath any explicitly requested file.
const DEFAULT_CONFIG: &str = "config/default";

/// Prefix for environment variable overrides (`SECUREDL__SIGNING__JWT_SECRET`).
const ENV_PREFIX: &str = "SECUREDL";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Secure link URL layout.
    #[serde(default)]
    pub link: LinkConfig,
    /// Token signing settings.
    #[serde(default)]
    pub signing: SigningConfig,
    /// Known sites keyed by site identifier.
    #[serde(default)]
    pub sites: HashMap<String, SiteConfig>,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` (if present), the file at `path`, and
    /// environment variables prefixed with `SECUREDL__`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG).required(false))
            .add_source(config::File::with_name(path).required(true))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
