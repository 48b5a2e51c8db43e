//! Templating entry points: a bare URL helper and an anchor tag helper.

pub mod arguments;
pub mod link;
pub mod tag;

pub use arguments::LinkArguments;
pub use link::SecureLinkViewHelper;
pub use tag::SecureLinkTagViewHelper;
