//! Normalizes a `file` argument into a combined identifier.

use tracing::debug;

use securedl_core::types::ResourceInput;

/// Reads the combined identifier out of whatever a caller passed as `file`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceIdentifierExtractor;

impl ResourceIdentifierExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Returns the identifier for `input`, or `None` when there is none.
    ///
    /// Strings are returned untouched. Handles are resolved to their stored
    /// file. A missing or unsupported input is not an error.
    pub fn extract(&self, input: Option<&ResourceInput>) -> Option<String> {
        match input {
            Some(ResourceInput::Identifier(identifier)) => Some(identifier.clone()),
            Some(ResourceInput::Handle(handle)) => {
                let identifier = handle.terminal().combined_identifier();
                debug!(kind = handle.kind(), identifier = %identifier, "Resolved file handle");
                Some(identifier)
            }
            Some(ResourceInput::Unsupported(kind)) => {
                debug!(kind = %kind, "Unsupported file argument, no link generated");
                None
            }
            None => {
                debug!("No file argument, no link generated");
                None
            }
        }
    }
}
