//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use securedl_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration (secret masked)
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path).await?;
            config.signing.jwt_secret = mask_secret(&config.signing.jwt_secret);
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path).await {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv(
                    "Link layout",
                    &format!(
                        "/{}/{}<token>/<file>",
                        config.link.link_prefix, config.link.token_prefix
                    ),
                );
                output::print_kv(
                    "Default timeout",
                    &format!("{}s", config.signing.default_timeout_seconds),
                );
                output::print_kv("Sites", &config.sites.len().to_string());
                if config.signing.jwt_secret.is_empty() {
                    output::print_warning("signing.jwt_secret is empty, links cannot be signed");
                }
                if config.signing.default_timeout_seconds <= 0 {
                    output::print_warning("signing.default_timeout_seconds must be positive");
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}

/// Mask a secret for display
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "****".to_string()
    }
}
