//! Rendered node tree

use serde::Serialize;
use url::Url;

use crate::domain::ports::UrlOpener;
use crate::domain::value_objects::NodeId;
use crate::error::LinksResult;

/// How sections are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinksStyle {
    /// Every section is its own headered group. For settings lists and forms.
    #[default]
    Sectioned,
    /// Entries are emitted inline with separators between sections. For
    /// command groups and menu bars.
    Flat,
}

/// Element of a [`Rendering`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    /// A section in [`LinksStyle::Sectioned`]
    Group {
        id: NodeId,
        header: Option<String>,
        children: Vec<RenderNode>,
    },
    /// An invocable link
    Button {
        id: NodeId,
        title: String,
        icon: String,
        url: Url,
    },
    /// A submenu, opened on demand
    Menu {
        id: NodeId,
        title: String,
        icon: String,
        children: Vec<RenderNode>,
    },
    /// Divider following the section `after` in [`LinksStyle::Flat`]
    Separator { after: NodeId },
}

impl RenderNode {
    /// Identifier of the node; separators report the section they follow
    pub fn id(&self) -> NodeId {
        match self {
            RenderNode::Group { id, .. }
            | RenderNode::Button { id, .. }
            | RenderNode::Menu { id, .. } => *id,
            RenderNode::Separator { after } => *after,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Group { children, .. } | RenderNode::Menu { children, .. } => children,
            RenderNode::Button { .. } | RenderNode::Separator { .. } => &[],
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, RenderNode::Separator { .. })
    }

    fn find(&self, target: NodeId) -> Option<&RenderNode> {
        match self {
            RenderNode::Separator { .. } => None,
            node if node.id() == target => Some(node),
            node => node.children().iter().find_map(|child| child.find(target)),
        }
    }
}

/// Output of a render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    style: LinksStyle,
    nodes: Vec<RenderNode>,
}

impl Rendering {
    pub(crate) fn new(style: LinksStyle, nodes: Vec<RenderNode>) -> Self {
        Self { style, nodes }
    }

    pub fn style(&self) -> LinksStyle {
        self.style
    }

    /// Top-level nodes
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Separators at the top level
    pub fn separator_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_separator()).count()
    }

    /// Number of nodes in the whole tree, separators included
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[RenderNode]) -> usize {
            nodes.iter().map(|node| 1 + count(node.children())).sum()
        }
        count(&self.nodes)
    }

    /// Every button, depth first
    pub fn buttons(&self) -> Vec<&RenderNode> {
        fn collect<'a>(nodes: &'a [RenderNode], out: &mut Vec<&'a RenderNode>) {
            for node in nodes {
                if let RenderNode::Button { .. } = node {
                    out.push(node);
                }
                collect(node.children(), out);
            }
        }

        let mut buttons = Vec::new();
        collect(&self.nodes, &mut buttons);
        buttons
    }

    /// Look up a group, button or menu by id at any depth
    pub fn find(&self, id: NodeId) -> Option<&RenderNode> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Activate the button `id`: its URL is handed to `opener` exactly once.
    ///
    /// Returns `false` if `id` is not a button of this rendering. Whether
    /// the opener manages to open the URL is not observed.
    pub fn activate<O>(&self, id: NodeId, opener: &O) -> bool
    where
        O: UrlOpener + ?Sized,
    {
        match self.find(id) {
            Some(RenderNode::Button { url, title, .. }) => {
                tracing::debug!(%id, %url, title = %title, "opening link");
                opener.open(url);
                true
            }
            _ => false,
        }
    }

    /// Pretty-printed JSON of the node tree
    pub fn to_json(&self) -> LinksResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
