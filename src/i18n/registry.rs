//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is built once on first access and is immutable afterwards,
//! so it can be shared freely between concurrent page builds.

use std::sync::OnceLock;

/// Static metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// URL path code (e.g., "ja", "zh-tw")
    pub code: &'static str,

    /// Suffix used by the dataset's field names (e.g., "zh_tw")
    pub field_suffix: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name shown in the language switcher
    pub native_name: &'static str,

    pub flag: &'static str,

    /// Value advertised in `hreflang` attributes
    pub hreflang: &'static str,

    /// Whether this is the base language (exactly one must be true)
    pub is_base: bool,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by its URL code (case-sensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, base first.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Languages that are served under a path prefix.
    pub fn list_alternates(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| !lang.is_base).collect()
    }

    /// Get the base language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one base language.
    pub fn base(&self) -> &LanguageConfig {
        let base_langs: Vec<_> = self.languages.iter().filter(|lang| lang.is_base).collect();

        match base_langs.len() {
            0 => panic!("No base language found in registry"),
            1 => base_langs[0],
            _ => panic!("Multiple base languages found in registry"),
        }
    }
}

/// The four languages the guidebook is published in.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ja",
            field_suffix: "ja",
            name: "Japanese",
            native_name: "日本語",
            flag: "🇯🇵",
            hreflang: "ja",
            is_base: true,
        },
        LanguageConfig {
            code: "zh-tw",
            field_suffix: "zh_tw",
            name: "Traditional Chinese",
            native_name: "繁體中文",
            flag: "🇹🇼",
            hreflang: "zh",
            is_base: false,
        },
        LanguageConfig {
            code: "ko",
            field_suffix: "ko",
            name: "Korean",
            native_name: "한국어",
            flag: "🇰🇷",
            hreflang: "ko",
            is_base: false,
        },
        LanguageConfig {
            code: "en",
            field_suffix: "en",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            hreflang: "en",
            is_base: false,
        },
    ]
}
