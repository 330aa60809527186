//! Per-language views of guide items.

use crate::i18n::{localized_path, Language};
use crate::model::{FieldFamily, FieldKey, GuideItem};
use serde::Serialize;

/// Resolve one field of `item` for `language`.
///
/// Localized fields use the alternate variant when non-empty, then the base
/// variant, then `""`. Plain fields ignore the language.
pub fn resolve<'a>(item: &'a GuideItem, field: impl Into<FieldKey>, language: Language) -> &'a str {
    match field.into() {
        FieldKey::Localized(family) => family.of(item).resolve(language),
        FieldKey::Plain(field) => field.of(item),
    }
}

/// `<title>` text: the SEO override for this language, else the name.
pub fn page_title(item: &GuideItem, language: Language) -> &str {
    match item.meta_title.get(language) {
        "" => resolve(item, FieldFamily::Name, language),
        title => title,
    }
}

/// Meta description: the SEO override for this language, else the summary.
pub fn page_description(item: &GuideItem, language: Language) -> &str {
    match item.meta_description.get(language) {
        "" => resolve(item, FieldFamily::Summary, language),
        description => description,
    }
}

/// Site path of an item's detail page
pub fn item_path(item_id: &str, language: Language) -> String {
    localized_path(&format!("/spots/{}", item_id), language)
}

/// A guide item flattened to one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedView {
    pub language: Language,
    pub item_id: String,
    pub path: String,
    pub name: String,
    pub catchy_comment: String,
    pub summary: String,
    pub description: String,
    pub highlight_1_text: String,
    pub highlight_2_text: String,
    pub address: String,
    pub main_image_url: String,
    pub highlight_1_image_url: String,
    pub highlight_2_image_url: String,
}

impl LocalizedView {
    pub fn new(item: &GuideItem, language: Language) -> Self {
        let text = |family: FieldFamily| resolve(item, family, language).to_string();

        Self {
            language,
            item_id: item.item_id.clone(),
            path: item_path(&item.item_id, language),
            name: text(FieldFamily::Name),
            catchy_comment: text(FieldFamily::CatchyComment),
            summary: text(FieldFamily::Summary),
            description: text(FieldFamily::Description),
            highlight_1_text: text(FieldFamily::Highlight1Text),
            highlight_2_text: text(FieldFamily::Highlight2Text),
            address: text(FieldFamily::Address),
            main_image_url: item.main_image_url.clone(),
            highlight_1_image_url: item.highlight_1_image_url.clone(),
            highlight_2_image_url: item.highlight_2_image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocalizedText, PlainField};

    fn item() -> GuideItem {
        GuideItem {
            item_id: "12".to_string(),
            main_image_url: "https://img.example/12.jpg".to_string(),
            name: LocalizedText {
                ja: "Foo".to_string(),
                en: "Bar".to_string(),
                ..Default::default()
            },
            summary: LocalizedText {
                ja: "沖縄の海".to_string(),
                ..Default::default()
            },
            address: LocalizedText {
                ja: "那覇市".to_string(),
                ko: "나하시".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_uses_alternate_when_present() {
        assert_eq!(resolve(&item(), FieldFamily::Name, Language::English), "Bar");
    }

    #[test]
    fn test_resolve_falls_back_to_base() {
        assert_eq!(resolve(&item(), FieldFamily::Name, Language::Korean), "Foo");
        assert_eq!(resolve(&item(), FieldFamily::Name, Language::TraditionalChinese), "Foo");
    }

    #[test]
    fn test_resolve_base_language_ignores_alternates() {
        let mut item = item();
        item.name.ja.clear();
        assert_eq!(resolve(&item, FieldFamily::Name, Language::Japanese), "");
        assert_eq!(resolve(&item, FieldFamily::Name, Language::English), "Bar");
    }

    #[test]
    fn test_resolve_every_family_falls_back() {
        let mut item = GuideItem::default();
        for family in FieldFamily::ALL {
            family.of_mut(&mut item).ja = format!("{}-ja", family.key());
        }
        for family in FieldFamily::ALL {
            for language in Language::ALL {
                assert_eq!(resolve(&item, family, language), format!("{}-ja", family.key()));
            }
        }
    }

    #[test]
    fn test_resolve_plain_fields_ignore_language() {
        for language in Language::ALL {
            assert_eq!(resolve(&item(), PlainField::ItemId, language), "12");
            assert_eq!(
                resolve(&item(), PlainField::MainImageUrl, language),
                "https://img.example/12.jpg"
            );
            assert_eq!(resolve(&item(), PlainField::Highlight1ImageUrl, language), "");
        }
    }

    #[test]
    fn test_page_title_prefers_meta_override() {
        let mut item = item();
        item.meta_title.en = "Foo Beach | Okinawa Guide".to_string();
        assert_eq!(page_title(&item, Language::English), "Foo Beach | Okinawa Guide");
        assert_eq!(page_title(&item, Language::Korean), "Foo");
    }

    #[test]
    fn test_page_description_falls_back_to_summary() {
        assert_eq!(page_description(&item(), Language::English), "沖縄の海");
    }

    #[test]
    fn test_item_path_per_language() {
        assert_eq!(item_path("12", Language::Japanese), "/spots/12");
        assert_eq!(item_path("12", Language::TraditionalChinese), "/zh-tw/spots/12");
    }

    #[test]
    fn test_localized_view() {
        let view = LocalizedView::new(&item(), Language::Korean);

        assert_eq!(view.language, Language::Korean);
        assert_eq!(view.path, "/ko/spots/12");
        assert_eq!(view.name, "Foo");
        assert_eq!(view.address, "나하시");
        assert_eq!(view.summary, "沖縄の海");
        assert_eq!(view.description, "");
        assert_eq!(view.main_image_url, "https://img.example/12.jpg");
    }
}
