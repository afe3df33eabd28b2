//! Built-in menus and composite sections
//!
//! Convenience compositions over [`LinkFactory`]. Anything not covered here
//! can be built directly with [`Section::new`] / [`Section::titled`] from
//! arbitrary entries.

use std::collections::HashMap;

use url::Url;

use super::link_factory::{LinkFactory, PlatformLinkKind};
use crate::domain::entities::{Entry, Link, Menu, Section};
use crate::domain::value_objects::{SocialPlatform, TextKey};

impl LinkFactory {
    /// "Follow the App" menu with a single section of `links`
    pub fn follow_the_app(&self, links: Vec<Link>) -> Menu {
        self.follow_the_app_section(Section::from_links(links))
    }

    /// "Follow the Developer" menu with a single section of `links`
    pub fn follow_the_developer(&self, links: Vec<Link>) -> Menu {
        self.follow_the_developer_section(Section::from_links(links))
    }

    fn follow_the_app_section(&self, section: Section) -> Menu {
        Menu::new(self.localize(TextKey::FollowTheApp), "app.badge", vec![section])
    }

    fn follow_the_developer_section(&self, section: Section) -> Menu {
        Menu::new(self.localize(TextKey::FollowTheDeveloper), "person", vec![section])
    }

    /// "More Apps from Developer" menu, e.g. one section per app category
    pub fn more_apps_from_developer(&self, sections: Vec<Section>) -> Menu {
        Menu::new(
            self.localize(TextKey::MoreAppsFromDeveloper),
            "plus.square.on.square",
            sections,
        )
    }

    /// "Apps from Friends" menu, e.g. one section per befriended developer
    pub fn apps_from_friends(&self, sections: Vec<Section>) -> Menu {
        Menu::new(
            self.localize(TextKey::AppsFromFriends),
            "star.square.on.square",
            sections,
        )
    }

    /// Rate, FAQ (only when `faq_url` is given) and contact links
    pub fn help_links(&self, app_id: &str, faq_url: Option<Url>, support_email: &str) -> Section {
        let mut entries = vec![Entry::Link(self.rate_the_app(app_id))];
        if let Some(faq_url) = faq_url {
            entries.push(Entry::Link(self.frequently_asked_questions(faq_url)));
        }
        entries.push(Entry::Link(self.contact_support(support_email)));

        Section::titled(self.localize(TextKey::HelpLinks), entries)
    }

    /// One link per platform, using the override handle for a platform when
    /// present and `handle` otherwise.
    pub fn platform_links(
        &self,
        kind: PlatformLinkKind,
        platforms: &[SocialPlatform],
        handle: &str,
        handle_overrides: &HashMap<SocialPlatform, String>,
    ) -> Section {
        Section::from_links(platforms.iter().map(|platform| {
            let handle = handle_overrides
                .get(platform)
                .map(String::as_str)
                .unwrap_or(handle);
            self.platform_link(kind, platform, handle)
        }))
    }

    /// "App on …" links for the app's own accounts
    pub fn app_social_links(
        &self,
        platforms: &[SocialPlatform],
        handle: &str,
        handle_overrides: &HashMap<SocialPlatform, String>,
    ) -> Section {
        self.platform_links(PlatformLinkKind::App, platforms, handle, handle_overrides)
    }

    /// "Developer on …" links for the developer's accounts
    pub fn developer_social_links(
        &self,
        platforms: &[SocialPlatform],
        handle: &str,
        handle_overrides: &HashMap<SocialPlatform, String>,
    ) -> Section {
        self.platform_links(PlatformLinkKind::Developer, platforms, handle, handle_overrides)
    }

    /// "Follow the App" and "Follow the Developer" menus
    pub fn social_menus(&self, app_links: Section, developer_links: Section) -> Section {
        Section::titled(
            self.localize(TextKey::SocialLinks),
            vec![
                self.follow_the_app_section(app_links).into(),
                self.follow_the_developer_section(developer_links).into(),
            ],
        )
    }

    /// "More Apps from Developer" and "Apps from Friends" menus
    pub fn app_menus(&self, own_app_links: Vec<Section>, friends_app_links: Vec<Section>) -> Section {
        Section::titled(
            self.localize(TextKey::AppLinks),
            vec![
                self.more_apps_from_developer(own_app_links).into(),
                self.apps_from_friends(friends_app_links).into(),
            ],
        )
    }

    /// App Store terms followed by the privacy policy
    pub fn legal_links(&self, privacy_url: Url) -> Section {
        Section::titled(
            self.localize(TextKey::LegalLinks),
            vec![
                self.app_store_terms_and_conditions().into(),
                self.privacy_policy(privacy_url).into(),
            ],
        )
    }
}
