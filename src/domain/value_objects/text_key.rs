//! Localizable text keys
//!
//! Every human-readable string the built-in constructors produce is looked up
//! through one of these keys, so the full set of translatable strings is known
//! at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key of a built-in, localizable string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKey {
    RateTheApp,
    FrequentlyAskedQuestions,
    ContactSupport,
    PrivacyPolicy,
    TermsAndConditions,
    /// Template, `{platform}` is replaced by the platform name
    FollowUsOn,
    /// Template, `{platform}` is replaced by the platform name
    DeveloperOn,
    /// Template, `{platform}` is replaced by the platform name
    AppOn,
    FollowTheApp,
    FollowTheDeveloper,
    MoreAppsFromDeveloper,
    AppsFromFriends,
    HelpLinks,
    SocialLinks,
    AppLinks,
    LegalLinks,
}

impl TextKey {
    /// Placeholder substituted in the `*On` templates
    pub const PLATFORM_PLACEHOLDER: &'static str = "{platform}";

    pub const ALL: [TextKey; 16] = [
        TextKey::RateTheApp,
        TextKey::FrequentlyAskedQuestions,
        TextKey::ContactSupport,
        TextKey::PrivacyPolicy,
        TextKey::TermsAndConditions,
        TextKey::FollowUsOn,
        TextKey::DeveloperOn,
        TextKey::AppOn,
        TextKey::FollowTheApp,
        TextKey::FollowTheDeveloper,
        TextKey::MoreAppsFromDeveloper,
        TextKey::AppsFromFriends,
        TextKey::HelpLinks,
        TextKey::SocialLinks,
        TextKey::AppLinks,
        TextKey::LegalLinks,
    ];

    /// Catalog name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            TextKey::RateTheApp => "rate_the_app",
            TextKey::FrequentlyAskedQuestions => "frequently_asked_questions",
            TextKey::ContactSupport => "contact_support",
            TextKey::PrivacyPolicy => "privacy_policy",
            TextKey::TermsAndConditions => "terms_and_conditions",
            TextKey::FollowUsOn => "follow_us_on",
            TextKey::DeveloperOn => "developer_on",
            TextKey::AppOn => "app_on",
            TextKey::FollowTheApp => "follow_the_app",
            TextKey::FollowTheDeveloper => "follow_the_developer",
            TextKey::MoreAppsFromDeveloper => "more_apps_from_developer",
            TextKey::AppsFromFriends => "apps_from_friends",
            TextKey::HelpLinks => "help_links",
            TextKey::SocialLinks => "social_links",
            TextKey::AppLinks => "app_links",
            TextKey::LegalLinks => "legal_links",
        }
    }

    /// English source string
    pub fn english(&self) -> &'static str {
        match self {
            TextKey::RateTheApp => "Rate the App",
            TextKey::FrequentlyAskedQuestions => "Frequently Asked Questions (FAQ)",
            TextKey::ContactSupport => "Contact Support",
            TextKey::PrivacyPolicy => "Privacy Policy",
            TextKey::TermsAndConditions => "Terms and Conditions",
            TextKey::FollowUsOn => "Follow us on {platform}",
            TextKey::DeveloperOn => "Developer on {platform}",
            TextKey::AppOn => "App on {platform}",
            TextKey::FollowTheApp => "Follow the App",
            TextKey::FollowTheDeveloper => "Follow the Developer",
            TextKey::MoreAppsFromDeveloper => "More Apps from Developer",
            TextKey::AppsFromFriends => "Apps from Friends",
            TextKey::HelpLinks => "Help",
            TextKey::SocialLinks => "Social Links",
            TextKey::AppLinks => "App Links",
            TextKey::LegalLinks => "Legal",
        }
    }

    /// Whether the string contains [`Self::PLATFORM_PLACEHOLDER`]
    pub fn is_template(&self) -> bool {
        matches!(
            self,
            TextKey::FollowUsOn | TextKey::DeveloperOn | TextKey::AppOn
        )
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown text key '{s}'"))
    }
}
