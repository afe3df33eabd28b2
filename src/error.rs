//! Error types for LinksKit
//!
//! Uses `thiserror` for library errors. Building and rendering the link tree
//! is infallible once its inputs are valid; the variants below cover the few
//! places where caller-supplied strings have to be parsed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for LinksKit operations
pub type LinksResult<T> = Result<T, LinksError>;

/// Main error type for LinksKit operations
#[derive(Error, Debug)]
pub enum LinksError {
    /// A caller-supplied string is not an absolute URL
    #[error("invalid URL '{input}': {message}")]
    InvalidUrl { input: String, message: String },

    /// A Mastodon instance is not a usable host name
    #[error("invalid Mastodon instance '{instance}': {message}")]
    InvalidMastodonInstance { instance: String, message: String },

    /// `configure` was called after the registry had already been set
    #[error("links are already configured; configure must be called exactly once at startup")]
    AlreadyConfigured,

    /// String catalog could not be parsed
    #[error("invalid string catalog in {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
