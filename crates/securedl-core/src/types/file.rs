//! File handle variants accepted as link targets.
//!
//! A link can be requested for a plain combined identifier string or for any
//! of the handle shapes the storage layer hands out. Every handle eventually
//! points at a [`StoredFile`], whose combined identifier is what gets signed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file as it exists in a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Numeric ID of the storage backend holding the file.
    pub storage_id: u32,
    /// Path of the file relative to the storage root.
    pub identifier: String,
}

impl StoredFile {
    /// Creates a stored file handle.
    pub fn new(storage_id: u32, identifier: impl Into<String>) -> Self {
        Self {
            storage_id,
            identifier: identifier.into(),
        }
    }

    /// Returns `"<storage_id>:<identifier>"`.
    pub fn combined_identifier(&self) -> String {
        format!("{}:{}", self.storage_id, self.identifier)
    }
}

/// A reference record pointing at a stored file (e.g. a file attached to a
/// content element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Reference record ID.
    pub uid: u64,
    /// Title override of the reference, if any.
    #[serde(default)]
    pub title: Option<String>,
    /// The referenced file.
    pub original: StoredFile,
}

/// A domain-model reference that wraps a [`FileReference`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedReference {
    /// Domain object ID.
    pub uid: u64,
    /// The wrapped reference record.
    pub reference: FileReference,
}

/// The handle shapes a caller may pass instead of an identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileHandle {
    /// Domain-model reference wrapping a reference record.
    Wrapped(WrappedReference),
    /// Reference record pointing at a file.
    Direct(FileReference),
    /// The file itself.
    Terminal(StoredFile),
}

impl FileHandle {
    /// Walks through any reference layers down to the stored file.
    pub fn terminal(&self) -> &StoredFile {
        match self {
            Self::Wrapped(wrapped) => &wrapped.reference.original,
            Self::Direct(reference) => &reference.original,
            Self::Terminal(file) => file,
        }
    }

    /// Short variant name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Wrapped(_) => "wrapped",
            Self::Direct(_) => "direct",
            Self::Terminal(_) => "terminal",
        }
    }
}

impl From<StoredFile> for FileHandle {
    fn from(file: StoredFile) -> Self {
        Self::Terminal(file)
    }
}

impl From<FileReference> for FileHandle {
    fn from(reference: FileReference) -> Self {
        Self::Direct(reference)
    }
}

impl From<WrappedReference> for FileHandle {
    fn from(wrapped: WrappedReference) -> Self {
        Self::Wrapped(wrapped)
    }
}

/// The `file` argument of a link request before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceInput {
    /// A combined identifier (`2:documents/report.pdf`) or a path.
    Identifier(String),
    /// One of the known handle shapes.
    Handle(FileHandle),
    /// A value of a type no identifier can be read from; holds the type name.
    Unsupported(String),
}

impl ResourceInput {
    /// Coerces a templating argument into a resource input.
    ///
    /// `null` yields `None`. Strings become identifiers, objects that match a
    /// [`FileHandle`] shape become handles, everything else is unsupported.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Identifier(s.clone())),
            Value::Object(_) => Some(
                serde_json::from_value::<FileHandle>(value.clone())
                    .map(Self::Handle)
                    .unwrap_or_else(|_| Self::Unsupported("object".to_string())),
            ),
            Value::Bool(_) => Some(Self::Unsupported("bool".to_string())),
            Value::Number(_) => Some(Self::Unsupported("number".to_string())),
            Value::Array(_) => Some(Self::Unsupported("array".to_string())),
        }
    }
}

impl From<&str> for ResourceInput {
    fn from(identifier: &str) -> Self {
        Self::Identifier(identifier.to_string())
    }
}

impl From<String> for ResourceInput {
    fn from(identifier: String) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<FileHandle> for ResourceInput {
    fn from(handle: FileHandle) -> Self {
        Self::Handle(handle)
    }
}

impl From<StoredFile> for ResourceInput {
    fn from(file: StoredFile) -> Self {
        Self::Handle(file.into())
    }
}

impl From<FileReference> for ResourceInput {
    fn from(reference: FileReference) -> Self {
        Self::Handle(reference.into())
    }
}

impl From<WrappedReference> for ResourceInput {
    fn from(wrapped: WrappedReference) -> Self {
        Self::Handle(wrapped.into())
    }
}
