//! Collaborator traits defined in `securedl-core` and implemented by other crates.

pub mod site;

pub use site::SiteFinder;
