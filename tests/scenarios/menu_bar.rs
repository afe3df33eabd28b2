//! Scenario: Menu Bar
//!
//! Journey: A desktop app shows the same links as a flat command menu.
//!
//! Steps:
//! 1. Host renders the settings sections in the flat style
//! 2. Sections become inline entries divided by separators
//! 3. Submenus nest several levels deep and stay flat inside
//!
//! Success Criteria:
//! - n sections produce n - 1 separators, none trailing
//! - Links four menus deep are still reachable and activatable

use std::cell::Cell;

use linkskit::{Entry, Link, LinksConfig, LinksStyle, LinksView, Menu, RenderNode, Section};
use url::Url;

use crate::common::*;

fn kinds(nodes: &[RenderNode]) -> Vec<&'static str> {
    nodes
        .iter()
        .map(|node| match node {
            RenderNode::Group { .. } => "group",
            RenderNode::Button { .. } => "button",
            RenderNode::Menu { .. } => "menu",
            RenderNode::Separator { .. } => "separator",
        })
        .collect()
}

/// SCENARIO: Settings sections as a flat menu
#[test]
fn scenario_settings_as_flat_menu() {
    let config = LinksConfig::new(PROVIDER_TOKEN, settings_sections(&factory()));
    let rendering = LinksView::new(&config)
        .with_style(LinksStyle::Flat)
        .render();

    assert_eq!(
        kinds(rendering.nodes()),
        [
            "button", "button", "button", "separator", "menu", "menu", "separator", "menu",
            "menu", "separator", "button", "button",
        ]
    );
    assert_eq!(rendering.separator_count(), 3);

    // "More Apps from Developer" holds three sections, so two separators.
    let more_apps = &rendering.nodes()[7];
    assert_eq!(
        kinds(more_apps.children()),
        ["button", "button", "separator", "button", "button", "button", "separator", "button", "button"]
    );
    let Entry::Menu(more_apps_menu) = &config.sections()[2].entries()[0] else {
        panic!("expected the more apps menu");
    };
    assert_eq!(
        more_apps.children()[2],
        RenderNode::Separator {
            after: more_apps_menu.sections()[0].id()
        }
    );
}

fn nested(depth: usize, leaf: Link) -> Menu {
    let mut menu = Menu::new("Level 1", "folder", vec![Section::from_links([leaf])]);
    for level in 2..=depth {
        menu = Menu::new(
            format!("Level {level}"),
            "folder",
            vec![Section::new(vec![menu.into()])],
        );
    }
    menu
}

/// SCENARIO: A link four menus deep
#[test]
fn scenario_deeply_nested_link_is_reachable() {
    let leaf = Link::parse("Deep", "link", "https://example.com/deep").unwrap();
    let leaf_id = leaf.id();
    let top = nested(4, leaf);
    assert_eq!(top.depth(), 4);

    let config = LinksConfig::new("", vec![Section::new(vec![top.into()])]);
    for style in [LinksStyle::Sectioned, LinksStyle::Flat] {
        let rendering = LinksView::new(&config).with_style(style).render();
        assert!(
            matches!(rendering.find(leaf_id), Some(RenderNode::Button { .. })),
            "{style:?}"
        );

        let opened = Cell::new(0);
        let opener = |url: &Url| {
            assert_eq!(url.as_str(), "https://example.com/deep");
            opened.set(opened.get() + 1);
        };
        assert!(rendering.activate(leaf_id, &opener));
        assert_eq!(opened.get(), 1);
    }
}

/// SCENARIO: Text outline of a flat menu
#[test]
fn scenario_flat_menu_text_outline() {
    let factory = factory();
    let config = LinksConfig::new(
        PROVIDER_TOKEN,
        vec![
            factory.help_links("1", None, "help@example.com"),
            factory.legal_links(example_url()),
        ],
    );
    let text = LinksView::new(&config)
        .with_style(LinksStyle::Flat)
        .render()
        .to_text(false);

    assert_eq!(
        text,
        "Rate the App\nContact Support\n--------------------\nTerms and Conditions\nPrivacy Policy\n"
    );
}
