//! Section tree to node tree

use super::node::{LinksStyle, RenderNode, Rendering};
use crate::domain::entities::{Entry, Section};

/// Render `sections` in `style`.
///
/// Pure: the same input always yields the same node tree. App Store links are
/// resolved with `provider_token`. Menus render their own sections with the
/// same style, so a flat menu bar gets flat submenus.
pub fn render(sections: &[Section], provider_token: &str, style: LinksStyle) -> Rendering {
    let nodes = render_sections(sections, provider_token, style);
    let rendering = Rendering::new(style, nodes);

    tracing::debug!(
        ?style,
        sections = sections.len(),
        nodes = rendering.node_count(),
        "rendered links"
    );
    rendering
}

fn render_sections(sections: &[Section], provider_token: &str, style: LinksStyle) -> Vec<RenderNode> {
    match style {
        LinksStyle::Sectioned => sections
            .iter()
            .map(|section| RenderNode::Group {
                id: section.id(),
                header: section.title().map(str::to_string),
                children: render_entries(section, provider_token, style),
            })
            .collect(),
        LinksStyle::Flat => {
            let mut nodes = Vec::new();
            for (index, section) in sections.iter().enumerate() {
                nodes.extend(render_entries(section, provider_token, style));
                if index + 1 < sections.len() {
                    nodes.push(RenderNode::Separator { after: section.id() });
                }
            }
            nodes
        }
    }
}

fn render_entries(section: &Section, provider_token: &str, style: LinksStyle) -> Vec<RenderNode> {
    section
        .entries()
        .iter()
        .map(|entry| render_entry(entry, provider_token, style))
        .collect()
}

fn render_entry(entry: &Entry, provider_token: &str, style: LinksStyle) -> RenderNode {
    match entry {
        Entry::Link(link) => RenderNode::Button {
            id: link.id(),
            title: link.title().to_string(),
            icon: link.icon().to_string(),
            url: link.url(provider_token),
        },
        Entry::Menu(menu) => RenderNode::Menu {
            id: menu.id(),
            title: menu.title().to_string(),
            icon: menu.icon().to_string(),
            children: render_sections(menu.sections(), provider_token, style),
        },
    }
}
