//! Links View
//!
//! Renders a section tree into a presentation-neutral node tree, recursing
//! into menus with the same style.
//!
//! # Module Structure
//!
//! - `node` - Rendered node tree and link activation
//! - `render` - Recursive section/menu walk
//! - `text` - Plain-text outline of a rendering
//! - `view` - View bound to a configuration and a style

mod node;
mod render;
mod text;
mod view;

pub use node::{LinksStyle, RenderNode, Rendering};
pub use render::render;
pub use view::LinksView;
