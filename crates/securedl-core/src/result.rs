//! Convenience result type alias for SecureDL.

use crate::error::AppError;

/// A specialized `Result` type for SecureDL operations.
pub type AppResult<T> = Result<T, AppError>;
