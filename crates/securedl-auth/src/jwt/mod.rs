//! JWT download token signing, decoding, and payload.

pub mod claims;
pub mod decoder;
pub mod factory;

pub use claims::TokenPayload;
pub use decoder::TokenDecoder;
pub use factory::SecureLinkFactory;
