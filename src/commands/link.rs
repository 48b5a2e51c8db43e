//! Secure URL generation command.

use clap::Args;

use crate::output::{self, OutputFormat};
use securedl_core::error::AppError;
use securedl_core::types::{ResourceInput, UserRestriction};
use securedl_service::LinkArguments;

/// Arguments shared by the `link` and `tag` commands
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Combined identifier or path of the file, e.g. `2:documents/report.pdf`
    #[arg(long, conflicts_with = "file_json")]
    pub file: Option<String>,

    /// File handle as JSON, e.g. `{"type":"terminal","storage_id":2,"identifier":"a.pdf"}`
    #[arg(long)]
    pub file_json: Option<String>,

    /// Frontend user ID, or `public` for user 0
    #[arg(long)]
    pub feuser: Option<String>,

    /// Token lifetime in seconds
    #[arg(long)]
    pub timeout: Option<i64>,

    /// Site identifier whose domain prefixes the link
    #[arg(long = "site")]
    pub site_identifier: Option<String>,

    /// Frontend user group ID (repeatable)
    #[arg(long = "group")]
    pub groups: Vec<i64>,
}

impl LinkArgs {
    /// Converts command-line flags into templating arguments.
    pub fn to_arguments(&self) -> Result<LinkArguments, AppError> {
        let file = match (&self.file, &self.file_json) {
            (Some(identifier), _) => Some(ResourceInput::from(identifier.as_str())),
            (None, Some(json)) => {
                let value: serde_json::Value = serde_json::from_str(json)?;
                ResourceInput::from_value(&value)
            }
            (None, None) => None,
        };

        let feuser = match &self.feuser {
            Some(value) => value.parse::<UserRestriction>()?,
            None => UserRestriction::Unrestricted,
        };

        Ok(LinkArguments {
            file,
            feuser,
            timeout: self.timeout,
            site_identifier: self.site_identifier.clone(),
            groups: self.groups.clone(),
        })
    }
}

/// Execute the link command
pub async fn execute(
    args: &LinkArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::create_service(config_path).await?;
    let url = service.link(&args.to_arguments()?)?;

    if url.is_empty() {
        output::print_warning("No file identifier given, nothing generated");
        return Ok(());
    }

    output::print_value("url", &url, format);
    Ok(())
}
