//! Domain Entities
//!
//! Nodes of the link tree. Each carries a [`NodeId`](super::value_objects::NodeId)
//! assigned at construction.
//! - `Link` - A leaf action opening a URL
//! - `Menu` - A titled submenu holding sections
//! - `Section` - An optionally titled list of entries

mod link;
mod menu;
mod section;

pub use link::Link;
pub use menu::Menu;
pub use section::{Entry, Section};
