//! UrlOpener port - hands activated links to the host environment

use url::Url;

/// Opens URLs on behalf of activated links.
///
/// Fire and forget: the renderer calls `open` once per activation and never
/// looks at the outcome. Failing to open a URL is the opener's concern.
pub trait UrlOpener {
    fn open(&self, url: &Url);
}

impl<F> UrlOpener for F
where
    F: Fn(&Url),
{
    fn open(&self, url: &Url) {
        self(url)
    }
}
