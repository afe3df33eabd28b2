//! Scenario: Localized Host
//!
//! Journey: A German app ships a string catalog and identifies itself through
//! the environment.
//!
//! Steps:
//! 1. Host writes a TOML catalog next to its resources
//! 2. Loads it and builds a factory with the environment host identity
//! 3. Renders the help and social sections
//!
//! Success Criteria:
//! - Translated titles appear, untranslated ones fall back to English
//! - Platform names are substituted into translated templates
//! - App Store campaign tokens use the environment bundle id

use std::collections::HashMap;
use std::fs;

use linkskit::{
    EnvHostIdentity, LinkFactory, LinksConfig, LinksView, RenderNode, SocialPlatform,
    StringCatalog,
};
use tempfile::tempdir;

const GERMAN: &str = r#"
language = "de"

[strings]
rate_the_app = "App bewerten"
help_links = "Hilfe"
app_on = "App auf {platform}"
"#;

/// SCENARIO: German catalog with environment host identity
#[test]
fn scenario_german_catalog_and_env_identity() {
    // Step 1: Catalog on disk
    let dir = tempdir().unwrap();
    let path = dir.path().join("de.toml");
    fs::write(&path, GERMAN).unwrap();

    // Step 2: Factory from catalog and environment
    let var = "LINKSKIT_SCENARIO_LOCALIZED_HOST_BUNDLE_ID";
    std::env::set_var(var, "de.example.Uebersetzer");
    let catalog = StringCatalog::load(&path).unwrap();
    assert_eq!(catalog.language(), Some("de"));
    let factory = LinkFactory::new(catalog, &EnvHostIdentity::with_var(var));
    assert_eq!(factory.campaign_token(), "de.example.Uebersetzer");

    // Step 3: Render
    let sections = vec![
        factory.help_links("1", None, "hilfe@example.com"),
        factory.app_social_links(&[SocialPlatform::Threads], "uebersetzer", &HashMap::new()),
        linkskit::Section::from_links([factory.own_app("2", "Zeiterfassung", "timer", None)]),
    ];
    let config = LinksConfig::new("549314", sections);
    let text = LinksView::new(&config).render().to_text(false);

    assert_eq!(
        text,
        "Hilfe\n  App bewerten\n  Contact Support\n\nApp auf Threads\n\nZeiterfassung\n"
    );

    let rendering = LinksView::new(&config).render();
    let RenderNode::Button { url, .. } = &rendering.nodes()[2].children()[0] else {
        panic!("expected the own app button");
    };
    assert_eq!(
        url.as_str(),
        "https://apps.apple.com/app/id2?pt=549314&ct=de.example.Uebersetzer&mt=8"
    );
}

/// SCENARIO: Missing environment identity falls back to the default token
#[test]
fn scenario_missing_env_identity_uses_fallback_token() {
    let var = "LINKSKIT_SCENARIO_UNSET_BUNDLE_ID";
    std::env::remove_var(var);

    let factory = LinkFactory::english(&EnvHostIdentity::with_var(var));
    assert_eq!(factory.campaign_token(), LinkFactory::FALLBACK_CAMPAIGN_TOKEN);
}
