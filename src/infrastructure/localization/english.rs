use crate::domain::ports::Localizer;
use crate::domain::value_objects::TextKey;

/// Localizer returning the built-in English strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn localize(&self, key: TextKey) -> String {
        key.english().to_string()
    }
}
