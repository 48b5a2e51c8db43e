//! Anchor tag generation command.

use clap::Args;

use super::link::LinkArgs;
use crate::output::{self, OutputFormat};
use securedl_core::error::AppError;

/// Arguments for the tag command
#[derive(Debug, Args)]
pub struct TagArgs {
    /// Link options
    #[command(flatten)]
    pub link: LinkArgs,

    /// Extra attribute as `name=value` (repeatable)
    #[arg(long = "attr", value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,

    /// Inner HTML of the anchor
    #[arg(long)]
    pub content: Option<String>,
}

/// Execute the tag command
pub async fn execute(
    args: &TagArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;
    let tag = service.tag(
        &args.link.to_arguments()?,
        &args.attributes,
        args.content.as_deref(),
    )?;

    if tag.is_empty() {
        output::print_warning("No file identifier given, nothing generated");
        return Ok(());
    }

    output::print_value("tag", &tag, format);
    Ok(())
}

/// Parse `name=value` into a pair
fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("attribute name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
