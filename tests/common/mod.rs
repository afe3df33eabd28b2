//! Common fixtures for LinksKit integration tests.
//!
//! `settings_sections` mirrors a typical app settings screen: help links,
//! social menus, app menus and legal links.

#![allow(dead_code)]

use std::collections::HashMap;

use linkskit::{LinkFactory, Section, SocialPlatform};
use url::Url;

pub const PROVIDER_TOKEN: &str = "549314";
pub const BUNDLE_ID: &str = "com.fline.TranslateKit";

pub fn factory() -> LinkFactory {
    LinkFactory::english(BUNDLE_ID)
}

pub fn example_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

pub fn settings_sections(factory: &LinkFactory) -> Vec<Section> {
    let own_developer_apps = Section::from_links([
        factory.own_app("6502914189", "FreemiumKit: In-App Purchases", "cart", None),
        factory.own_app("6480134993", "FreelanceKit: Time Tracking", "timer", None),
    ]);
    let own_consumer_apps = Section::from_links([
        factory.own_app("6472669260", "CrossCraft: Crossword Tests", "puzzlepiece", None),
        factory.own_app("6477829138", "FocusBeats: Study Music Timer", "music.note", None),
        factory.own_app("6587583340", "Pleydia Organizer: Media Renamer", "popcorn", None),
    ]);
    let own_vision_apps = Section::from_links([
        factory.own_app("6479207869", "Guided Guest Mode: Device Demo", "questionmark.circle", None),
        factory.own_app("6478062053", "Posters: Discover Movies at Home", "movieclapper", None),
    ]);
    let nicos_apps = Section::from_links([
        factory.friends_app("1249686798", "NFC.cool Tools: Tag Reader", "tag", Some("106913804"), None),
        factory.friends_app("6443995212", "Metadata for Fastlane Tools", "hammer", Some("106913804"), None),
    ]);
    let jans_apps = Section::from_links([factory.friends_app(
        "6503256642",
        "App Exhibit: Your App Showcase",
        "square.grid.3x3.fill.square",
        None,
        None,
    )]);

    let app_links = factory.app_social_links(
        &[
            SocialPlatform::Twitter,
            SocialPlatform::mastodon("mastodon.social").unwrap(),
            SocialPlatform::Threads,
        ],
        "TranslateKit",
        &HashMap::from([(SocialPlatform::Twitter, "TranslateKitApp".to_string())]),
    );
    let developer_links = factory.developer_social_links(
        &[
            SocialPlatform::Twitter,
            SocialPlatform::mastodon("iosdev.space").unwrap(),
            SocialPlatform::Threads,
        ],
        "Jeehut",
        &HashMap::new(),
    );

    vec![
        factory.help_links("6476773066", Some(example_url()), "translatekit@fline.dev"),
        factory.social_menus(app_links, developer_links),
        factory.app_menus(
            vec![own_developer_apps, own_consumer_apps, own_vision_apps],
            vec![nicos_apps, jans_apps],
        ),
        factory.legal_links(example_url()),
    ]
}
