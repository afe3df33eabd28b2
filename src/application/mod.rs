//! Application Layer
//!
//! Turns semantic intents ("rate the app", "follow us on Mastodon", "our other
//! apps") into link trees.
//!
//! - `link_factory` - Leaf links (help, legal, social, App Store)
//! - `section_builder` - Built-in menus and composite sections

mod link_factory;
mod section_builder;

pub use link_factory::{LinkFactory, PlatformLinkKind, APP_STORE_EULA_URL};
