//! # securedl-core
//!
//! Core crate for SecureDL. Contains configuration schemas, the file handle
//! and link request types, the site lookup trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SecureDL crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
