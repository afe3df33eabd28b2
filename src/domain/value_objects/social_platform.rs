//! Social platform value object - where "follow" links point to

use std::fmt;

use url::{Position, Url};

use super::builtin_url;
use crate::error::{LinksError, LinksResult};

/// A validated Mastodon server, e.g. `mastodon.social` or `iosdev.space`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MastodonInstance {
    origin: Url,
}

impl MastodonInstance {
    /// Validate a Mastodon host name.
    ///
    /// Accepts a bare host (optionally with port), tolerating a leading
    /// `https://` and trailing slashes. Anything carrying a path, query,
    /// fragment or credentials is rejected.
    pub fn new(instance: &str) -> LinksResult<Self> {
        let invalid = |message: &str| LinksError::InvalidMastodonInstance {
            instance: instance.to_string(),
            message: message.to_string(),
        };

        let host = instance.trim();
        let host = host.strip_prefix("https://").unwrap_or(host);
        let host = host.trim_end_matches('/');
        if host.is_empty() {
            return Err(invalid("host name is empty"));
        }

        let origin = Url::parse(&format!("https://{host}/")).map_err(|e| invalid(&e.to_string()))?;
        if origin.path() != "/"
            || origin.query().is_some()
            || origin.fragment().is_some()
            || !origin.username().is_empty()
            || origin.password().is_some()
        {
            return Err(invalid("expected a bare host name"));
        }

        Ok(Self { origin })
    }

    /// Host (and port, if any) of the instance
    pub fn host(&self) -> &str {
        &self.origin[Position::BeforeHost..Position::AfterPort]
    }
}

impl fmt::Display for MastodonInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// Social media platform a link can point to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    GitHub,
    Instagram,
    LinkedIn,
    /// Mastodon is federated, so each value names its server
    Mastodon(MastodonInstance),
    Pinterest,
    Reddit,
    Threads,
    TikTok,
    /// X, formerly Twitter
    Twitter,
    YouTube,
}

impl SocialPlatform {
    /// All platforms that need no extra parameters
    pub const ALL_FIXED: [SocialPlatform; 10] = [
        SocialPlatform::Facebook,
        SocialPlatform::GitHub,
        SocialPlatform::Instagram,
        SocialPlatform::LinkedIn,
        SocialPlatform::Pinterest,
        SocialPlatform::Reddit,
        SocialPlatform::Threads,
        SocialPlatform::TikTok,
        SocialPlatform::Twitter,
        SocialPlatform::YouTube,
    ];

    /// Mastodon on the given server
    pub fn mastodon(instance: &str) -> LinksResult<Self> {
        MastodonInstance::new(instance).map(Self::Mastodon)
    }

    /// Stable kebab-case identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::GitHub => "github",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::Mastodon(_) => "mastodon",
            Self::Pinterest => "pinterest",
            Self::Reddit => "reddit",
            Self::Threads => "threads",
            Self::TikTok => "tiktok",
            Self::Twitter => "twitter",
            Self::YouTube => "youtube",
        }
    }

    /// Human-readable platform name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::GitHub => "GitHub",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mastodon(_) => "Mastodon",
            Self::Pinterest => "Pinterest",
            Self::Reddit => "Reddit",
            Self::Threads => "Threads",
            Self::TikTok => "TikTok",
            Self::Twitter => "X/Twitter",
            Self::YouTube => "YouTube",
        }
    }

    /// SF Symbol name used as the link icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Facebook => "hand.thumbsup",
            Self::GitHub => "cat.circle.fill",
            Self::Instagram => "camera.circle",
            Self::LinkedIn => "point.topleft.down.to.point.bottomright.curvepath",
            Self::Mastodon(_) => "square.split.1x2",
            Self::Pinterest => "pin.circle",
            Self::Reddit => "antenna.radiowaves.left.and.right.circle",
            Self::Threads => "at.circle",
            Self::TikTok => "music.note",
            Self::Twitter => "bird",
            Self::YouTube => "play.rectangle.fill",
        }
    }

    /// Profile URL for `handle`.
    ///
    /// The handle becomes a single path segment and is percent-encoded with
    /// the WHATWG path-segment set: `[A-Za-z0-9_.-]` pass through verbatim,
    /// a space turns into `%20` and `/`, `?`, `#` are escaped so the handle
    /// can never change the URL structure. `%` is escaped as well, so handles
    /// are never decoded. A handle of exactly `.` or `..` cannot be a path
    /// segment and is dropped, leaving the platform's base path. Existence of
    /// the profile is not checked.
    pub fn url(&self, handle: &str) -> Url {
        let mut url = match self {
            Self::Mastodon(instance) => instance.origin.clone(),
            _ => builtin_url(self.origin()),
        };

        let segment = match self {
            Self::Mastodon(_) | Self::Threads | Self::TikTok => format!("@{handle}"),
            _ => handle.to_string(),
        };

        // Origins are https URLs, which always have path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(self.path_prefix())
                .push(&segment);
        }
        url
    }

    fn origin(&self) -> &'static str {
        match self {
            Self::Facebook => "https://facebook.com",
            Self::GitHub => "https://github.com",
            Self::Instagram => "https://instagram.com",
            Self::LinkedIn => "https://www.linkedin.com",
            Self::Mastodon(_) => "https://mastodon.social",
            Self::Pinterest => "https://pinterest.com",
            Self::Reddit => "https://reddit.com",
            Self::Threads => "https://www.threads.net",
            Self::TikTok => "https://www.tiktok.com",
            Self::Twitter => "https://twitter.com",
            Self::YouTube => "https://www.youtube.com",
        }
    }

    fn path_prefix(&self) -> &'static [&'static str] {
        match self {
            Self::LinkedIn => &["in"],
            Self::Reddit => &["user"],
            _ => &[],
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
