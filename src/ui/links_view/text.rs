//! Plain-text outline of a rendering
//!
//! One line per node, two spaces of indentation per level. Separators are
//! drawn as a rule as wide as the widest line.

use unicode_width::UnicodeWidthStr;

use super::node::{RenderNode, Rendering};
use crate::ui::theme::Glyph;

const INDENT: usize = 2;
const MIN_RULE_WIDTH: usize = 3;

enum Line {
    Text { depth: usize, text: String },
    Rule { depth: usize },
    Blank,
}

impl Rendering {
    /// Outline for terminals and logs. Icons are not drawn.
    pub fn to_text(&self, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        push_nodes(self.nodes(), 0, supports_unicode, &mut lines);

        let width = lines
            .iter()
            .map(|line| match line {
                Line::Text { depth, text } => depth * INDENT + text.width(),
                Line::Rule { .. } | Line::Blank => 0,
            })
            .max()
            .unwrap_or(0);

        let rule = Glyph::Rule.render(supports_unicode);
        let mut out = String::new();
        for line in lines {
            match line {
                Line::Text { depth, text } => {
                    out.push_str(&" ".repeat(depth * INDENT));
                    out.push_str(&text);
                }
                Line::Rule { depth } => {
                    let indent = depth * INDENT;
                    out.push_str(&" ".repeat(indent));
                    out.push_str(&rule.repeat(width.saturating_sub(indent).max(MIN_RULE_WIDTH)));
                }
                Line::Blank => {}
            }
            out.push('\n');
        }
        out
    }
}

fn push_nodes(nodes: &[RenderNode], depth: usize, supports_unicode: bool, lines: &mut Vec<Line>) {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            RenderNode::Group {
                header, children, ..
            } => {
                if index > 0 {
                    lines.push(Line::Blank);
                }
                match header {
                    Some(header) => {
                        lines.push(Line::Text {
                            depth,
                            text: header.clone(),
                        });
                        push_nodes(children, depth + 1, supports_unicode, lines);
                    }
                    None => push_nodes(children, depth, supports_unicode, lines),
                }
            }
            RenderNode::Button { title, .. } => lines.push(Line::Text {
                depth,
                text: title.clone(),
            }),
            RenderNode::Menu {
                title, children, ..
            } => {
                lines.push(Line::Text {
                    depth,
                    text: format!("{} {title}", Glyph::Menu.render(supports_unicode)),
                });
                push_nodes(children, depth + 1, supports_unicode, lines);
            }
            RenderNode::Separator { .. } => lines.push(Line::Rule { depth }),
        }
    }
}
