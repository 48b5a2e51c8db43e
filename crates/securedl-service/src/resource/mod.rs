//! Resource identifier extraction.

pub mod extractor;

pub use extractor::ResourceIdentifierExtractor;
