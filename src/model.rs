//! Uniform guide records, independent of the payload shape they came from.

use crate::i18n::Language;
use serde::Serialize;

/// One text field in all four languages. Missing variants are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub ja: String,
    pub zh_tw: String,
    pub ko: String,
    pub en: String,
}

impl LocalizedText {
    /// Raw variant for `language`, without fallback.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Japanese => &self.ja,
            Language::TraditionalChinese => &self.zh_tw,
            Language::Korean => &self.ko,
            Language::English => &self.en,
        }
    }

    pub fn get_mut(&mut self, language: Language) -> &mut String {
        match language {
            Language::Japanese => &mut self.ja,
            Language::TraditionalChinese => &mut self.zh_tw,
            Language::Korean => &mut self.ko,
            Language::English => &mut self.en,
        }
    }

    /// Variant for `language`, else the base variant, else `""`.
    pub fn resolve(&self, language: Language) -> &str {
        match self.get(language) {
            "" => self.get(Language::BASE),
            value => value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Language::ALL.iter().all(|lang| self.get(*lang).is_empty())
    }
}

/// A point of interest after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuideItem {
    pub item_id: String,
    pub main_image_url: String,
    pub highlight_1_image_url: String,
    pub highlight_2_image_url: String,

    pub name: LocalizedText,
    pub catchy_comment: LocalizedText,
    pub summary: LocalizedText,
    pub description: LocalizedText,
    pub highlight_1_text: LocalizedText,
    pub highlight_2_text: LocalizedText,
    pub address: LocalizedText,

    /// SEO overrides; the dataset only fills some languages
    pub meta_title: LocalizedText,
    pub meta_description: LocalizedText,
}

/// Families of localizable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFamily {
    Name,
    CatchyComment,
    Summary,
    Description,
    Highlight1Text,
    Highlight2Text,
    Address,
    MetaTitle,
    MetaDescription,
}

impl FieldFamily {
    pub const ALL: [FieldFamily; 9] = [
        FieldFamily::Name,
        FieldFamily::CatchyComment,
        FieldFamily::Summary,
        FieldFamily::Description,
        FieldFamily::Highlight1Text,
        FieldFamily::Highlight2Text,
        FieldFamily::Address,
        FieldFamily::MetaTitle,
        FieldFamily::MetaDescription,
    ];

    /// Field name prefix in pre-normalized records (`name` in `name_ko`).
    pub fn key(&self) -> &'static str {
        match self {
            FieldFamily::Name => "name",
            FieldFamily::CatchyComment => "catchy_comment",
            FieldFamily::Summary => "summary",
            FieldFamily::Description => "description",
            FieldFamily::Highlight1Text => "highlight_1_text",
            FieldFamily::Highlight2Text => "highlight_2_text",
            FieldFamily::Address => "address",
            FieldFamily::MetaTitle => "meta_title",
            FieldFamily::MetaDescription => "meta_description",
        }
    }

    /// Accessor table: the family's storage on an item.
    pub fn of<'a>(&self, item: &'a GuideItem) -> &'a LocalizedText {
        match self {
            FieldFamily::Name => &item.name,
            FieldFamily::CatchyComment => &item.catchy_comment,
            FieldFamily::Summary => &item.summary,
            FieldFamily::Description => &item.description,
            FieldFamily::Highlight1Text => &item.highlight_1_text,
            FieldFamily::Highlight2Text => &item.highlight_2_text,
            FieldFamily::Address => &item.address,
            FieldFamily::MetaTitle => &item.meta_title,
            FieldFamily::MetaDescription => &item.meta_description,
        }
    }

    pub fn of_mut<'a>(&self, item: &'a mut GuideItem) -> &'a mut LocalizedText {
        match self {
            FieldFamily::Name => &mut item.name,
            FieldFamily::CatchyComment => &mut item.catchy_comment,
            FieldFamily::Summary => &mut item.summary,
            FieldFamily::Description => &mut item.description,
            FieldFamily::Highlight1Text => &mut item.highlight_1_text,
            FieldFamily::Highlight2Text => &mut item.highlight_2_text,
            FieldFamily::Address => &mut item.address,
            FieldFamily::MetaTitle => &mut item.meta_title,
            FieldFamily::MetaDescription => &mut item.meta_description,
        }
    }
}

/// Fields that have no per-language variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlainField {
    ItemId,
    MainImageUrl,
    Highlight1ImageUrl,
    Highlight2ImageUrl,
}

impl PlainField {
    pub const ALL: [PlainField; 4] = [
        PlainField::ItemId,
        PlainField::MainImageUrl,
        PlainField::Highlight1ImageUrl,
        PlainField::Highlight2ImageUrl,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PlainField::ItemId => "item_id",
            PlainField::MainImageUrl => "main_image_url",
            PlainField::Highlight1ImageUrl => "highlight_1_image_url",
            PlainField::Highlight2ImageUrl => "highlight_2_image_url",
        }
    }

    pub fn of<'a>(&self, item: &'a GuideItem) -> &'a str {
        match self {
            PlainField::ItemId => &item.item_id,
            PlainField::MainImageUrl => &item.main_image_url,
            PlainField::Highlight1ImageUrl => &item.highlight_1_image_url,
            PlainField::Highlight2ImageUrl => &item.highlight_2_image_url,
        }
    }

    pub fn of_mut<'a>(&self, item: &'a mut GuideItem) -> &'a mut String {
        match self {
            PlainField::ItemId => &mut item.item_id,
            PlainField::MainImageUrl => &mut item.main_image_url,
            PlainField::Highlight1ImageUrl => &mut item.highlight_1_image_url,
            PlainField::Highlight2ImageUrl => &mut item.highlight_2_image_url,
        }
    }
}

/// Any addressable field of a [`GuideItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Localized(FieldFamily),
    Plain(PlainField),
}

impl From<FieldFamily> for FieldKey {
    fn from(family: FieldFamily) -> Self {
        FieldKey::Localized(family)
    }
}

impl From<PlainField> for FieldKey {
    fn from(field: PlainField) -> Self {
        FieldKey::Plain(field)
    }
}
