//! Mapping between site paths and languages.
//!
//! Base-language pages live at the root (`/spots/12`); every alternate
//! language is served under its code (`/ko/spots/12`).

use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

static LANGUAGE_PREFIX: OnceLock<Regex> = OnceLock::new();

/// Matches a leading language segment and captures what follows it.
fn language_prefix() -> &'static Regex {
    LANGUAGE_PREFIX.get_or_init(|| {
        let codes: Vec<String> = Language::ALL
            .iter()
            .map(|lang| regex::escape(lang.code()))
            .collect();
        Regex::new(&format!(r"^/(?:{})(?P<rest>[/?#].*)?$", codes.join("|")))
            .expect("language prefix pattern is valid")
    })
}

/// Infer the page language from a URL path.
///
/// Only an exact leading segment counts (`/en/...`, `/zh-tw`); anything else,
/// including `/english`, is the base language.
pub fn language_from_path(path: &str) -> Language {
    let first_segment = path
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");

    Language::ALL
        .into_iter()
        .find(|lang| !lang.is_base() && lang.code() == first_segment)
        .unwrap_or(Language::BASE)
}

/// Rewrite `path` for `language`, replacing any existing language prefix.
pub fn localized_path(path: &str, language: Language) -> String {
    let path = match path {
        "" => "/".to_string(),
        p if p.starts_with('/') => p.to_string(),
        p => format!("/{}", p),
    };

    let clean = match language_prefix().captures(&path) {
        Some(caps) => caps.name("rest").map(|m| m.as_str()).unwrap_or("").to_string(),
        None => path,
    };

    if language.is_base() {
        if clean.starts_with('/') {
            clean
        } else {
            format!("/{}", clean)
        }
    } else {
        format!("/{}{}", language.code(), clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_language_from_path_alternates() {
        assert_eq!(language_from_path("/en/spots/1"), Language::English);
        assert_eq!(language_from_path("/ko"), Language::Korean);
        assert_eq!(language_from_path("/zh-tw/"), Language::TraditionalChinese);
    }

    #[test]
    fn test_language_from_path_defaults_to_base() {
        assert_eq!(language_from_path("/"), Language::BASE);
        assert_eq!(language_from_path(""), Language::BASE);
        assert_eq!(language_from_path("/spots/1"), Language::BASE);
        assert_eq!(language_from_path("/english/spots"), Language::BASE);
        assert_eq!(language_from_path("/fr/spots"), Language::BASE);
        // The base code is never a prefix
        assert_eq!(language_from_path("/ja/spots"), Language::BASE);
    }

    #[test]
    fn test_language_from_path_ignores_query() {
        assert_eq!(language_from_path("/ko?ref=top"), Language::Korean);
    }

    #[test]
    fn test_localized_path_prefix_before_query() {
        assert_eq!(localized_path("/ko?ref=top", Language::English), "/en?ref=top");
        assert_eq!(localized_path("/ko#access", Language::BASE), "/#access");
        assert_eq!(localized_path("/ko?ref=top", Language::BASE), "/?ref=top");
        assert_eq!(
            language_from_path(&localized_path("/ko?ref=top", Language::English)),
            Language::English
        );
        // A query right after a non-language segment is untouched
        assert_eq!(localized_path("/kobe?ref=top", Language::Korean), "/ko/kobe?ref=top");
    }

    #[test]
    fn test_localized_path_switches_prefix() {
        assert_eq!(localized_path("/ko/spots/1", Language::English), "/en/spots/1");
        assert_eq!(localized_path("/spots/1", Language::TraditionalChinese), "/zh-tw/spots/1");
    }

    #[test]
    fn test_localized_path_base_drops_prefix() {
        assert_eq!(localized_path("/ko/spots/1", Language::BASE), "/spots/1");
        assert_eq!(localized_path("/ja/spots/1", Language::BASE), "/spots/1");
        assert_eq!(localized_path("/en", Language::BASE), "/");
    }

    #[test]
    fn test_localized_path_root() {
        assert_eq!(localized_path("", Language::BASE), "/");
        assert_eq!(localized_path("/", Language::BASE), "/");
        assert_eq!(localized_path("", Language::Korean), "/ko/");
    }

    #[test]
    fn test_localized_path_keeps_lookalike_segments() {
        assert_eq!(localized_path("/english/tour", Language::Korean), "/ko/english/tour");
        assert_eq!(localized_path("/kobe", Language::BASE), "/kobe");
    }

    #[test]
    fn test_localized_path_adds_leading_slash() {
        assert_eq!(localized_path("spots/3", Language::English), "/en/spots/3");
    }

    proptest! {
        #[test]
        fn prop_localized_path_roundtrips_language(
            tail in "(/[a-z]{2,8}[0-9]){0,3}",
            idx in 0usize..4,
        ) {
            let lang = Language::ALL[idx];
            let path = localized_path(&tail, lang);
            prop_assert_eq!(language_from_path(&path), lang);
        }

        #[test]
        fn prop_localized_path_is_idempotent(
            tail in "(/[a-z]{2,8}[0-9]){1,3}",
            from in 0usize..4,
            to in 0usize..4,
        ) {
            let start = localized_path(&tail, Language::ALL[from]);
            let once = localized_path(&start, Language::ALL[to]);
            let twice = localized_path(&once, Language::ALL[to]);
            prop_assert_eq!(once, twice);
        }
    }
}
