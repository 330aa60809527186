//! Internationalization (i18n) for the guidebook.
//!
//! - `registry`: single source of truth for the four published languages
//! - `language`: the `Language` enum, with Japanese as the base language
//! - `path`: language prefixes in site paths
//! - `strings`: fixed site chrome strings per language
//!
//! # Example
//!
//! ```rust,ignore
//! use okinawa_guide::i18n::{language_from_path, localized_path, Language};
//!
//! let lang = language_from_path("/ko/spots/12");
//! assert_eq!(localized_path("/ko/spots/12", Language::English), "/en/spots/12");
//! ```

mod language;
mod path;
mod registry;
mod strings;

pub use language::Language;
pub use path::{language_from_path, localized_path};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{t, LanguageStrings, UiString};
