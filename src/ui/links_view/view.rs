//! View bound to a configuration

use super::node::{LinksStyle, Rendering};
use super::render::render;
use crate::config::{self, LinksConfig};
use crate::domain::ports::UrlOpener;
use crate::domain::value_objects::NodeId;

/// Renders a [`LinksConfig`] in a fixed style.
///
/// ```
/// use linkskit::{LinkFactory, LinksConfig, LinksStyle, LinksView};
///
/// let factory = LinkFactory::english("com.example.app");
/// let config = LinksConfig::new("549314", vec![factory.help_links("123", None, "help@example.com")]);
///
/// let rendering = LinksView::new(&config).with_style(LinksStyle::Flat).render();
/// assert_eq!(rendering.buttons().len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinksView<'a> {
    config: &'a LinksConfig,
    style: LinksStyle,
}

impl<'a> LinksView<'a> {
    pub fn new(config: &'a LinksConfig) -> Self {
        Self {
            config,
            style: LinksStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LinksStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> LinksStyle {
        self.style
    }

    pub fn config(&self) -> &'a LinksConfig {
        self.config
    }

    pub fn render(&self) -> Rendering {
        render(
            self.config.sections(),
            self.config.provider_token(),
            self.style,
        )
    }

    /// Render and activate `id` in one step, see [`Rendering::activate`]
    pub fn activate<O>(&self, id: NodeId, opener: &O) -> bool
    where
        O: UrlOpener + ?Sized,
    {
        self.render().activate(id, opener)
    }
}

impl LinksView<'static> {
    /// View of the process-wide configuration
    pub fn configured() -> Self {
        Self::new(config::current())
    }
}
