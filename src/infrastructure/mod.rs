//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `localization/` - Localizers (English defaults, TOML string catalogs)
//! - `host_identity` - Host bundle identifier from the environment

pub mod host_identity;
pub mod localization;

// Re-export for convenience
pub use host_identity::EnvHostIdentity;
pub use localization::{CatalogWarning, CatalogWarningKind, EnglishLocalizer, StringCatalog};
