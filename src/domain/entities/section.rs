//! Section entity and its entries

use super::link::Link;
use super::menu::Menu;
use crate::domain::value_objects::NodeId;

/// Element of a section: either a leaf link or a nested menu
#[derive(Debug, PartialEq, Eq)]
pub enum Entry {
    Link(Link),
    Menu(Menu),
}

impl Entry {
    /// Identifier of the wrapped link or menu
    pub fn id(&self) -> NodeId {
        match self {
            Entry::Link(link) => link.id(),
            Entry::Menu(menu) => menu.id(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Link(link) => link.title(),
            Entry::Menu(menu) => menu.title(),
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Entry::Link(link) => link.icon(),
            Entry::Menu(menu) => menu.icon(),
        }
    }
}

impl From<Link> for Entry {
    fn from(link: Link) -> Self {
        Entry::Link(link)
    }
}

impl From<Menu> for Entry {
    fn from(menu: Menu) -> Self {
        Entry::Menu(menu)
    }
}

/// Ordered list of entries with an optional header title
#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    id: NodeId,
    title: Option<String>,
    entries: Vec<Entry>,
}

impl Section {
    /// Untitled section, rendered without a header
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            id: NodeId::new(),
            title: None,
            entries,
        }
    }

    pub fn titled(title: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            id: NodeId::new(),
            title: Some(title.into()),
            entries,
        }
    }

    /// Untitled section made only of links
    pub fn from_links(links: impl IntoIterator<Item = Link>) -> Self {
        Self::new(links.into_iter().map(Entry::Link).collect())
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of links in this section, including those inside menus
    pub fn link_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Link(_) => 1,
                Entry::Menu(menu) => menu.link_count(),
            })
            .sum()
    }

    /// Deepest menu nesting inside this section (0 when it holds only links)
    pub fn menu_depth(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Link(_) => 0,
                Entry::Menu(menu) => menu.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Identifiers of this section and every node below it, depth first
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = vec![self.id];
        for entry in &self.entries {
            ids.push(entry.id());
            if let Entry::Menu(menu) = entry {
                ids.extend(menu.sections().iter().flat_map(Section::node_ids));
            }
        }
        ids
    }
}
