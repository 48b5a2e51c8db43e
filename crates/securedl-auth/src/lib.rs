//! # securedl-auth
//!
//! Download token handling for SecureDL.
//!
//! ## Modules
//!
//! - `jwt` — token payload, the per-call signing factory, and token inspection
//! - `link` — the `/<link_prefix>/<token_prefix><token>/<filename>` URL layout

pub mod jwt;
pub mod link;

pub use jwt::{SecureLinkFactory, TokenDecoder, TokenPayload};
pub use link::LinkFormat;
