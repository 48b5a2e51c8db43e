//! Secure link generation.

pub mod generator;

pub use generator::SecureLinkGenerator;
