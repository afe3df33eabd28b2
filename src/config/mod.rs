//! Configuration module for LinksKit
//!
//! The host configures its links once at startup:
//! 1. Explicitly, by passing a [`LinksConfig`] to a [`LinksView`](crate::LinksView)
//! 2. Process-wide, through [`configure`] and the write-once [`Registry`]
//!
//! Rendering before anything was configured shows an empty tree.

mod registry;
mod types;

pub use registry::{configure, configure_with, current, is_configured, Registry};
pub use types::LinksConfig;
