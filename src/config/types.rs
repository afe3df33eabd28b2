//! Configuration types

use crate::domain::entities::Section;

/// Everything needed to render the links: the provider token shared by the
/// developer's own App Store links and the top-level sections.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LinksConfig {
    provider_token: String,
    sections: Vec<Section>,
}

impl LinksConfig {
    /// `provider_token` is the `pt` query parameter of the developer's App
    /// Store campaign links; it is the same for all of their apps.
    pub fn new(provider_token: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            provider_token: provider_token.into(),
            sections,
        }
    }

    /// No provider token and no sections
    pub const fn empty() -> Self {
        Self {
            provider_token: String::new(),
            sections: Vec::new(),
        }
    }

    pub fn provider_token(&self) -> &str {
        &self.provider_token
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of links across all sections and menus
    pub fn link_count(&self) -> usize {
        self.sections.iter().map(Section::link_count).sum()
    }
}
