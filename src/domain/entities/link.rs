//! Link entity

use url::Url;

use crate::domain::value_objects::{AppStoreListing, Destination, NodeId};
use crate::error::{LinksError, LinksResult};

/// A leaf action: title, icon and the URL it opens.
///
/// Links are not `Clone`: every link in a tree is a distinct node with its
/// own identifier.
#[derive(Debug, PartialEq, Eq)]
pub struct Link {
    id: NodeId,
    title: String,
    icon: String,
    destination: Destination,
}

impl Link {
    /// Create a link to an already validated URL
    pub fn new(title: impl Into<String>, icon: impl Into<String>, url: Url) -> Self {
        Self::with_destination(title, icon, Destination::Url(url))
    }

    /// Create a link from a URL string.
    ///
    /// Callers are expected to pass a valid absolute URL; anything else is
    /// reported as [`LinksError::InvalidUrl`].
    pub fn parse(title: impl Into<String>, icon: impl Into<String>, url: &str) -> LinksResult<Self> {
        let parsed = Url::parse(url).map_err(|e| LinksError::InvalidUrl {
            input: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(title, icon, parsed))
    }

    /// Create a link to an App Store listing
    pub fn app_store(
        title: impl Into<String>,
        icon: impl Into<String>,
        listing: AppStoreListing,
    ) -> Self {
        Self::with_destination(title, icon, Destination::AppStore(listing))
    }

    fn with_destination(
        title: impl Into<String>,
        icon: impl Into<String>,
        destination: Destination,
    ) -> Self {
        Self {
            id: NodeId::new(),
            title: title.into(),
            icon: icon.into(),
            destination,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// SF Symbol name
    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// URL to open, given the configured provider token
    pub fn url(&self, configured_provider_token: &str) -> Url {
        self.destination.resolve(configured_provider_token)
    }
}
