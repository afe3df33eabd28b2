//! Process-wide, write-once link configuration

use once_cell::sync::OnceCell;

use super::types::LinksConfig;
use crate::domain::entities::Section;
use crate::error::{LinksError, LinksResult};

static EMPTY: LinksConfig = LinksConfig::empty();
static GLOBAL: Registry = Registry::new();

/// Write-once holder of a [`LinksConfig`].
///
/// The first successful [`Registry::configure`] freezes the configuration;
/// later calls fail with [`LinksError::AlreadyConfigured`] and leave it
/// untouched. Reads before configuration see an empty config.
#[derive(Debug)]
pub struct Registry {
    config: OnceCell<LinksConfig>,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            config: OnceCell::new(),
        }
    }

    pub fn configure(&self, config: LinksConfig) -> LinksResult<()> {
        let sections = config.sections().len();
        let links = config.link_count();

        match self.config.set(config) {
            Ok(()) => {
                tracing::info!(sections, links, "links configured");
                Ok(())
            }
            Err(_) => {
                tracing::warn!("ignoring repeated links configuration");
                Err(LinksError::AlreadyConfigured)
            }
        }
    }

    /// Current configuration, or an empty one if nothing was configured yet
    pub fn get(&self) -> &LinksConfig {
        self.config.get().unwrap_or(&EMPTY)
    }

    pub fn is_configured(&self) -> bool {
        self.config.get().is_some()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure the process-wide links once at startup.
///
/// `provider_token` is the `pt` parameter of the developer's App Store
/// campaign links. `sections` are rendered top to bottom, e.g.
/// `help_links`, `social_menus`, `app_menus` and `legal_links` from
/// [`LinkFactory`](crate::LinkFactory), or custom sections.
pub fn configure(provider_token: impl Into<String>, sections: Vec<Section>) -> LinksResult<()> {
    configure_with(LinksConfig::new(provider_token, sections))
}

/// Configure the process-wide links from a prepared [`LinksConfig`]
pub fn configure_with(config: LinksConfig) -> LinksResult<()> {
    GLOBAL.configure(config)
}

/// The process-wide configuration (empty until [`configure`] succeeds)
pub fn current() -> &'static LinksConfig {
    GLOBAL.get()
}

pub fn is_configured() -> bool {
    GLOBAL.is_configured()
}
