//! Domain Layer
//!
//! The link tree and everything needed to describe it, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Tree nodes (Link, Menu, Section)
//! - `value_objects/` - Immutable value types (SocialPlatform, Destination, TextKey)
//! - `ports/` - Interfaces implemented by the host or by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network
//! 2. **Immutable nodes** - Links, menus and sections never change after construction
//! 3. **Ports & Adapters** - Localization, host identity and URL opening go through traits

pub mod entities;
pub mod ports;
pub mod value_objects;
