//! Presentation layer
//!
//! Renders the session state to HTML. All four panels are always rendered;
//! only the visible one lacks the `hidden` attribute.

pub mod page;

pub use page::{PageRenderer, RenderError};
