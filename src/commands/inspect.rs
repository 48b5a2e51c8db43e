//! Token inspection command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use securedl_core::error::AppError;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// A secure link (absolute or relative) or a bare token
    pub link: String,
}

/// Payload display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PayloadRow {
    /// Claim name
    claim: String,
    /// Claim value
    value: String,
}

/// Execute the inspect command
pub async fn execute(
    args: &InspectArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;
    let decoder = service.decoder();

    let payload = if args.link.contains('/') {
        decoder.decode_url(&args.link)?
    } else {
        decoder.decode(&args.link)?
    };

    if format == OutputFormat::Json {
        output::print_item(&payload, format);
        return Ok(());
    }

    let groups = payload
        .groups
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let rows = vec![
        PayloadRow {
            claim: "file".to_string(),
            value: payload.file.clone(),
        },
        PayloadRow {
            claim: "user".to_string(),
            value: payload
                .user
                .map(|id| id.to_string())
                .unwrap_or_else(|| "(unrestricted)".to_string()),
        },
        PayloadRow {
            claim: "groups".to_string(),
            value: groups,
        },
        PayloadRow {
            claim: "exp".to_string(),
            value: format!(
                "{} ({})",
                payload.exp,
                payload.expires_at().format("%Y-%m-%d %H:%M:%S UTC")
            ),
        },
        PayloadRow {
            claim: "status".to_string(),
            value: if payload.is_expired() {
                "expired (within clock-skew leeway)".to_string()
            } else {
                format!("valid, {}s left", payload.remaining_ttl_seconds())
            },
        },
    ];

    output::print_list(&rows, format);
    Ok(())
}
