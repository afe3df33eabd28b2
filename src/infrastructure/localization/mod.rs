//! Localizer implementations
//!
//! - `english` - Built-in English strings
//! - `catalog` - Translations loaded from a TOML string catalog

mod catalog;
mod english;

pub use catalog::{CatalogWarning, CatalogWarningKind, StringCatalog};
pub use english::EnglishLocalizer;
