//! Anchor tag rendering.

pub mod renderer;

pub use renderer::TagRenderer;
