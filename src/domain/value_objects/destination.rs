//! Where a link leads when activated

use url::Url;

use super::builtin_url;

/// Which `pt` (provider token) query parameter an App Store listing carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderToken {
    /// The token configured for the whole app, known at render time
    Configured,
    /// A token for another developer's account
    Explicit(String),
    /// No `pt` parameter at all
    Omitted,
}

/// App Store product page with campaign attribution.
///
/// The URL is assembled when the link is rendered because the configured
/// provider token is only known once the links are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStoreListing {
    app_id: String,
    provider_token: ProviderToken,
    campaign_token: String,
}

impl AppStoreListing {
    pub fn new(
        app_id: impl Into<String>,
        provider_token: ProviderToken,
        campaign_token: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            provider_token,
            campaign_token: campaign_token.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn provider_token(&self) -> &ProviderToken {
        &self.provider_token
    }

    pub fn campaign_token(&self) -> &str {
        &self.campaign_token
    }

    /// `https://apps.apple.com/app/id{id}?pt={pt}&ct={ct}&mt=8`, without
    /// `pt` when the token is [`ProviderToken::Omitted`].
    pub fn url(&self, configured_provider_token: &str) -> Url {
        let mut url = builtin_url("https://apps.apple.com/app");
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&format!("id{}", self.app_id));
        }

        {
            let mut query = url.query_pairs_mut();
            match &self.provider_token {
                ProviderToken::Configured => {
                    query.append_pair("pt", configured_provider_token);
                }
                ProviderToken::Explicit(token) => {
                    query.append_pair("pt", token);
                }
                ProviderToken::Omitted => {}
            }
            query
                .append_pair("ct", &self.campaign_token)
                .append_pair("mt", "8");
        }
        url
    }
}

/// Target of a [`Link`](crate::Link)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Fixed absolute URL
    Url(Url),
    /// App Store listing resolved against the configured provider token
    AppStore(AppStoreListing),
}

impl Destination {
    /// Resolve to the URL handed to the opener
    pub fn resolve(&self, configured_provider_token: &str) -> Url {
        match self {
            Destination::Url(url) => url.clone(),
            Destination::AppStore(listing) => listing.url(configured_provider_token),
        }
    }
}
