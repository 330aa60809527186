//! Language type: the fixed set of languages the guide is published in.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported language.
///
/// Japanese is the base language: its field variants carry the source text
/// and every other language falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    TraditionalChinese,
    Korean,
    English,
}

impl Language {
    /// The fallback terminus for every localized field.
    pub const BASE: Language = Language::Japanese;

    /// Every language, base first.
    pub const ALL: [Language; 4] = [
        Language::Japanese,
        Language::TraditionalChinese,
        Language::Korean,
        Language::English,
    ];

    /// Create a Language from its URL code (e.g., "ko", "zh-tw").
    ///
    /// # Example
    /// ```ignore
    /// let korean = Language::from_code("ko")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match Self::ALL.iter().find(|lang| lang.code() == code) {
            Some(lang) => Ok(*lang),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// URL path code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::TraditionalChinese => "zh-tw",
            Language::Korean => "ko",
            Language::English => "en",
        }
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the registry is missing one of the enum's codes, which is a
    /// programming error caught by the registry tests.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("every Language variant is registered")
    }

    pub fn field_suffix(&self) -> &'static str {
        self.config().field_suffix
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    pub fn hreflang(&self) -> &'static str {
        self.config().hreflang
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::BASE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
