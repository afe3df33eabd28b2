//! TOML string catalog
//!
//! ```toml
//! language = "de"
//!
//! [strings]
//! rate_the_app = "App bewerten"
//! follow_us_on = "Folge uns auf {platform}"
//! ```
//!
//! Keys are the snake_case names of [`TextKey`]. Keys missing from the
//! catalog fall back to English.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ports::Localizer;
use crate::domain::value_objects::TextKey;
use crate::error::{LinksError, LinksResult};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

/// Why a catalog entry was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogWarningKind {
    /// Key is not a known text key (or an unknown top-level field)
    UnknownKey,
    /// Template translation lost its `{platform}` placeholder
    MissingPlaceholder,
}

/// Non-fatal catalog problem surfaced to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    pub key: String,
    pub file: PathBuf,
    pub kind: CatalogWarningKind,
}

/// Translations for the built-in strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringCatalog {
    language: Option<String>,
    strings: HashMap<TextKey, String>,
}

impl StringCatalog {
    /// Load a catalog file, logging any warnings.
    pub fn load(path: &Path) -> LinksResult<Self> {
        let (catalog, warnings) = Self::load_with_warnings(path)?;
        for warning in &warnings {
            tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                kind = ?warning.kind,
                "ignoring string catalog entry"
            );
        }
        Ok(catalog)
    }

    /// Load a catalog file and collect non-fatal warnings.
    pub fn load_with_warnings(path: &Path) -> LinksResult<(Self, Vec<CatalogWarning>)> {
        let content = fs::read_to_string(path)?;
        Self::parse_with_warnings(&content, path)
    }

    /// Parse catalog content; `origin` is only used in errors and warnings.
    pub fn parse_with_warnings(
        content: &str,
        origin: &Path,
    ) -> LinksResult<(Self, Vec<CatalogWarning>)> {
        let mut warnings = Vec::new();
        let deserializer = toml::de::Deserializer::new(content);

        let file: CatalogFile = serde_ignored::deserialize(deserializer, |path| {
            warnings.push(CatalogWarning {
                key: path.to_string(),
                file: origin.to_path_buf(),
                kind: CatalogWarningKind::UnknownKey,
            });
        })
        .map_err(|e| LinksError::InvalidCatalog {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut strings = HashMap::new();
        for (name, value) in file.strings {
            let warning = |kind| CatalogWarning {
                key: name.clone(),
                file: origin.to_path_buf(),
                kind,
            };

            match name.parse::<TextKey>() {
                Ok(key) if key.is_template() && !value.contains(TextKey::PLATFORM_PLACEHOLDER) => {
                    warnings.push(warning(CatalogWarningKind::MissingPlaceholder));
                }
                Ok(key) => {
                    strings.insert(key, value);
                }
                Err(_) => warnings.push(warning(CatalogWarningKind::UnknownKey)),
            }
        }

        let catalog = Self {
            language: file.language,
            strings,
        };
        Ok((catalog, warnings))
    }

    /// Build a catalog in code
    pub fn from_entries(
        language: Option<String>,
        entries: impl IntoIterator<Item = (TextKey, String)>,
    ) -> Self {
        Self {
            language,
            strings: entries.into_iter().collect(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Translation for `key`, if the catalog has one
    pub fn get(&self, key: TextKey) -> Option<&str> {
        self.strings.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Localizer for StringCatalog {
    fn localize(&self, key: TextKey) -> String {
        self.get(key).unwrap_or_else(|| key.english()).to_string()
    }
}
