//! Localizer port - turns text keys into user-facing strings

use crate::domain::value_objects::TextKey;

/// Resolves built-in strings for the current language.
///
/// Template keys ([`TextKey::is_template`]) must keep the
/// [`TextKey::PLATFORM_PLACEHOLDER`] in the returned string.
pub trait Localizer: Send + Sync {
    fn localize(&self, key: TextKey) -> String;

    /// Localize a template key and substitute the platform name
    fn localize_with_platform(&self, key: TextKey, platform: &str) -> String {
        self.localize(key)
            .replace(TextKey::PLATFORM_PLACEHOLDER, platform)
    }
}

impl<F> Localizer for F
where
    F: Fn(TextKey) -> String + Send + Sync,
{
    fn localize(&self, key: TextKey) -> String {
        self(key)
    }
}
