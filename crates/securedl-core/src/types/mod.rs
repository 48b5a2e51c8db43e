//! Core type definitions used across the SecureDL workspace.

pub mod file;
pub mod request;
pub mod user;

pub use file::{FileHandle, FileReference, ResourceInput, StoredFile, WrappedReference};
pub use request::LinkRequest;
pub use user::UserRestriction;
