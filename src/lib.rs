//! LinksKit - configurable help, social, app and legal links
//!
//! An app describes its links once as a tree of [`Section`]s holding
//! [`Link`]s and nested [`Menu`]s, then renders that tree in one of two
//! [`LinksStyle`]s. [`LinkFactory`] builds the common links (rate the app,
//! contact support, social profiles, App Store campaign links) from semantic
//! intents instead of hand-written URLs.
//!
//! ```
//! use linkskit::{LinkFactory, LinksConfig, LinksStyle, LinksView, SocialPlatform};
//! use std::collections::HashMap;
//!
//! let factory = LinkFactory::english("com.example.app");
//! let social = factory.app_social_links(&[SocialPlatform::GitHub], "example", &HashMap::new());
//! let config = LinksConfig::new("549314", vec![social]);
//!
//! let text = LinksView::new(&config).with_style(LinksStyle::Flat).render().to_text(false);
//! assert_eq!(text, "App on GitHub\n");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{LinkFactory, PlatformLinkKind, APP_STORE_EULA_URL};
pub use config::{configure, configure_with, current, is_configured, LinksConfig, Registry};
pub use domain::entities::{Entry, Link, Menu, Section};
pub use domain::ports::{HostIdentity, Localizer, UrlOpener};
pub use domain::value_objects::{
    AppStoreListing, Destination, MastodonInstance, NodeId, ProviderToken, SocialPlatform, TextKey,
};
pub use error::{LinksError, LinksResult};
pub use infrastructure::{
    CatalogWarning, CatalogWarningKind, EnglishLocalizer, EnvHostIdentity, StringCatalog,
};
pub use ui::{render, LinksStyle, LinksView, RenderNode, Rendering};
