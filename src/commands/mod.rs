//! CLI command definitions and dispatch.

pub mod config;
pub mod inspect;
pub mod link;
pub mod tag;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use securedl_core::config::AppConfig;
use securedl_core::error::AppError;
use securedl_service::SecureDownloadService;

/// SecureDL — signed, time-limited download links
#[derive(Debug, Parser)]
#[command(name = "securedl", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a secure download URL
    Link(link::LinkArgs),
    /// Generate an anchor tag around a secure download URL
    Tag(tag::TagArgs),
    /// Verify a secure link or token and show its payload
    Inspect(inspect::InspectArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Link(args) => link::execute(args, &self.config, self.format).await,
            Commands::Tag(args) => tag::execute(args, &self.config, self.format).await,
            Commands::Inspect(args) => inspect::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub async fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the link services from configuration
pub async fn create_service(config_path: &str) -> Result<SecureDownloadService, AppError> {
    let config = load_config(config_path).await?;
    Ok(SecureDownloadService::from_config(&config))
}
