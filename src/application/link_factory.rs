//! Link construction from semantic intents
//!
//! The factory owns URL template assembly and default parameters: titles come
//! from the injected [`Localizer`], the default App Store campaign token from
//! the [`HostIdentity`] it was created with.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::domain::entities::Link;
use crate::domain::ports::{HostIdentity, Localizer};
use crate::domain::value_objects::{
    builtin_url, AppStoreListing, ProviderToken, SocialPlatform, TextKey,
};
use crate::infrastructure::{EnglishLocalizer, EnvHostIdentity};

/// Standard Apple EULA used by [`LinkFactory::app_store_terms_and_conditions`]
pub const APP_STORE_EULA_URL: &str =
    "https://www.apple.com/legal/internet-services/itunes/dev/stdeula/";

/// Which title template a social link uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformLinkKind {
    /// "Follow us on {platform}"
    FollowUs,
    /// "App on {platform}"
    App,
    /// "Developer on {platform}"
    Developer,
}

impl PlatformLinkKind {
    fn text_key(self) -> TextKey {
        match self {
            PlatformLinkKind::FollowUs => TextKey::FollowUsOn,
            PlatformLinkKind::App => TextKey::AppOn,
            PlatformLinkKind::Developer => TextKey::DeveloperOn,
        }
    }
}

/// Builds [`Link`]s for the common help, legal, social and App Store intents.
#[derive(Clone)]
pub struct LinkFactory {
    localizer: Arc<dyn Localizer>,
    campaign_token: String,
}

impl LinkFactory {
    /// Campaign token used when the host identity is unknown
    pub const FALLBACK_CAMPAIGN_TOKEN: &'static str = "com.default.identifier";

    pub fn new<H>(localizer: impl Localizer + 'static, host: &H) -> Self
    where
        H: HostIdentity + ?Sized,
    {
        Self {
            localizer: Arc::new(localizer),
            campaign_token: host
                .bundle_identifier()
                .unwrap_or_else(|| Self::FALLBACK_CAMPAIGN_TOKEN.to_string()),
        }
    }

    /// English titles, campaign token from `host`
    pub fn english<H>(host: &H) -> Self
    where
        H: HostIdentity + ?Sized,
    {
        Self::new(EnglishLocalizer, host)
    }

    /// Replace the localizer, keeping the campaign token
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Arc::new(localizer);
        self
    }

    /// Default campaign token for App Store links
    pub fn campaign_token(&self) -> &str {
        &self.campaign_token
    }

    pub fn localize(&self, key: TextKey) -> String {
        self.localizer.localize(key)
    }

    /// Link to the App Store review sheet of `app_id`
    pub fn rate_the_app(&self, app_id: &str) -> Link {
        let mut url = builtin_url("https://apps.apple.com/app/apple-store");
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&format!("id{app_id}"));
        }
        url.query_pairs_mut().append_pair("action", "write-review");

        Link::new(self.localize(TextKey::RateTheApp), "star", url)
    }

    pub fn frequently_asked_questions(&self, url: Url) -> Link {
        Link::new(
            self.localize(TextKey::FrequentlyAskedQuestions),
            "questionmark.bubble",
            url,
        )
    }

    /// `mailto:` link to the support address
    pub fn contact_support(&self, email: &str) -> Link {
        let mut url = builtin_url("mailto:");
        url.set_path(email);
        Link::new(self.localize(TextKey::ContactSupport), "envelope", url)
    }

    pub fn privacy_policy(&self, url: Url) -> Link {
        Link::new(self.localize(TextKey::PrivacyPolicy), "lock.shield", url)
    }

    pub fn terms_and_conditions(&self, url: Url) -> Link {
        Link::new(
            self.localize(TextKey::TermsAndConditions),
            "text.book.closed",
            url,
        )
    }

    /// Terms and conditions pointing at Apple's standard EULA
    pub fn app_store_terms_and_conditions(&self) -> Link {
        self.terms_and_conditions(builtin_url(APP_STORE_EULA_URL))
    }

    /// "Follow us on {platform}"
    pub fn follow_us_on(&self, platform: &SocialPlatform, handle: &str) -> Link {
        self.platform_link(PlatformLinkKind::FollowUs, platform, handle)
    }

    /// "Developer on {platform}"
    pub fn developer_on(&self, platform: &SocialPlatform, handle: &str) -> Link {
        self.platform_link(PlatformLinkKind::Developer, platform, handle)
    }

    /// "App on {platform}"
    pub fn app_on(&self, platform: &SocialPlatform, handle: &str) -> Link {
        self.platform_link(PlatformLinkKind::App, platform, handle)
    }

    pub fn platform_link(
        &self,
        kind: PlatformLinkKind,
        platform: &SocialPlatform,
        handle: &str,
    ) -> Link {
        let title = self
            .localizer
            .localize_with_platform(kind.text_key(), platform.display_name());
        Link::new(title, platform.icon(), platform.url(handle))
    }

    /// One of the developer's own apps.
    ///
    /// Carries the provider token configured for the whole app, filled in when
    /// the link is rendered. `campaign_token` defaults to the host identity.
    pub fn own_app(
        &self,
        app_id: &str,
        name: &str,
        icon: &str,
        campaign_token: Option<&str>,
    ) -> Link {
        let listing = AppStoreListing::new(
            app_id,
            ProviderToken::Configured,
            campaign_token.unwrap_or(&self.campaign_token),
        );
        Link::app_store(name, icon, listing)
    }

    /// An app by someone else.
    ///
    /// With a `provider_token` the URL carries `pt={token}`; without one the
    /// `pt` parameter is left out entirely.
    pub fn friends_app(
        &self,
        app_id: &str,
        name: &str,
        icon: &str,
        provider_token: Option<&str>,
        campaign_token: Option<&str>,
    ) -> Link {
        let provider_token = match provider_token {
            Some(token) => ProviderToken::Explicit(token.to_string()),
            None => ProviderToken::Omitted,
        };
        let listing = AppStoreListing::new(
            app_id,
            provider_token,
            campaign_token.unwrap_or(&self.campaign_token),
        );
        Link::app_store(name, icon, listing)
    }
}

impl Default for LinkFactory {
    /// English titles, campaign token from `LINKSKIT_BUNDLE_ID`
    fn default() -> Self {
        Self::english(&EnvHostIdentity::default())
    }
}

impl fmt::Debug for LinkFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkFactory")
            .field("campaign_token", &self.campaign_token)
            .finish_non_exhaustive()
    }
}
