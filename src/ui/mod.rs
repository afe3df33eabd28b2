//! Presentation of the link tree
//!
//! - `links_view` - Recursive renderer, rendered node tree and activation
//! - `theme` - Glyphs used by the plain-text surface

pub mod links_view;
pub mod theme;

pub use links_view::{render, LinksStyle, LinksView, RenderNode, Rendering};
