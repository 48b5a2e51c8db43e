//! Site lookup and domain prefixing.

pub mod registry;
pub mod resolver;

pub use registry::ConfiguredSites;
pub use resolver::DomainResolver;
