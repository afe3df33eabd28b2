//! Menu entity

use super::section::Section;
use crate::domain::value_objects::NodeId;

/// A titled submenu containing one or more sections
#[derive(Debug, PartialEq, Eq)]
pub struct Menu {
    id: NodeId,
    title: String,
    icon: String,
    sections: Vec<Section>,
}

impl Menu {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: NodeId::new(),
            title: title.into(),
            icon: icon.into(),
            sections,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// SF Symbol name
    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of links reachable through this menu
    pub fn link_count(&self) -> usize {
        self.sections.iter().map(Section::link_count).sum()
    }

    /// Deepest menu nesting below and including this menu
    pub fn depth(&self) -> usize {
        1 + self.sections.iter().map(Section::menu_depth).max().unwrap_or(0)
    }
}
