//! # securedl-service
//!
//! Link generation services for SecureDL. Each service is built once from
//! configuration and shared behind `Arc`; none of them keeps per-request state.
//!
//! Services follow constructor injection: collaborators are provided at
//! construction time.

pub mod link;
pub mod resource;
pub mod service;
pub mod site;
pub mod tag;
pub mod view;

pub use link::SecureLinkGenerator;
pub use resource::ResourceIdentifierExtractor;
pub use service::SecureDownloadService;
pub use site::{ConfiguredSites, DomainResolver};
pub use tag::TagRenderer;
pub use view::{LinkArguments, SecureLinkTagViewHelper, SecureLinkViewHelper};
