//! Property tests for rendering.

use proptest::prelude::*;

use linkskit::{render, Entry, LinksStyle, NodeId, RenderNode, Section};

use crate::tree::{build, tree};

fn style() -> impl Strategy<Value = LinksStyle> {
    prop_oneof![Just(LinksStyle::Sectioned), Just(LinksStyle::Flat)]
}

fn every_link_id(sections: &[Section]) -> Vec<NodeId> {
    fn walk(sections: &[Section], out: &mut Vec<NodeId>) {
        for section in sections {
            for entry in section.entries() {
                match entry {
                    Entry::Link(link) => out.push(link.id()),
                    Entry::Menu(menu) => walk(menu.sections(), out),
                }
            }
        }
    }

    let mut ids = Vec::new();
    walk(sections, &mut ids);
    ids
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering the same tree twice yields equal node trees.
    #[test]
    fn property_render_is_pure(shapes in tree(), style in style(), token in "[0-9]{0,8}") {
        let sections = build(&shapes);
        prop_assert_eq!(render(&sections, &token, style), render(&sections, &token, style));
    }

    /// PROPERTY: Flat rendering of n sections has n - 1 top-level separators.
    #[test]
    fn property_flat_separators_between_sections(shapes in tree()) {
        let sections = build(&shapes);
        let rendering = render(&sections, "", LinksStyle::Flat);
        prop_assert_eq!(rendering.separator_count(), sections.len().saturating_sub(1));
        let ends_with_separator = matches!(rendering.nodes().last(), Some(RenderNode::Separator { .. }));
        prop_assert!(!ends_with_separator);
    }

    /// PROPERTY: Sectioned rendering has one group per section and no separators.
    #[test]
    fn property_sectioned_groups_every_section(shapes in tree()) {
        let sections = build(&shapes);
        let rendering = render(&sections, "", LinksStyle::Sectioned);
        prop_assert_eq!(rendering.nodes().len(), sections.len());
        prop_assert_eq!(rendering.separator_count(), 0);
        for (node, section) in rendering.nodes().iter().zip(&sections) {
            prop_assert_eq!(node.id(), section.id());
        }
    }

    /// PROPERTY: Every link, at any menu depth, renders as exactly one button.
    #[test]
    fn property_every_link_is_a_reachable_button(shapes in tree(), style in style()) {
        let sections = build(&shapes);
        let rendering = render(&sections, "", style);
        let link_ids = every_link_id(&sections);

        prop_assert_eq!(rendering.buttons().len(), link_ids.len());
        for id in link_ids {
            let found = matches!(rendering.find(id), Some(RenderNode::Button { .. }));
            prop_assert!(found);
        }
    }
}
