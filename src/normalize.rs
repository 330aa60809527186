//! Payload normalization.
//!
//! The dataset endpoint has shipped three payload shapes over time. Each is
//! recognised by an explicit probe, tried in a fixed order, and mapped to
//! [`GuideItem`]s with the field table that belongs to that shape.
//! Nothing in here fails: an unrecognised payload normalizes to no items.

use crate::i18n::Language;
use crate::i18n::Language::{English as EN, Japanese as JA, Korean as KO, TraditionalChinese as ZH};
use crate::model::FieldFamily::{
    Address, CatchyComment, Description, Highlight1Text, Highlight2Text, MetaDescription,
    MetaTitle, Name, Summary,
};
use crate::model::{FieldFamily, GuideItem, PlainField};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Category value marking a sightseeing spot
pub const SPOT_CATEGORY: &str = "1";

/// Deployment-dependent normalization switches
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Apply the category filter to keyed-object payloads too
    pub keyed_requires_category: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            keyed_requires_category: true,
        }
    }
}

/// A payload whose shape has been recognised
#[derive(Debug, Clone, Copy)]
pub enum PayloadShape<'a> {
    FeatureCollection(&'a [Value]),
    Array(&'a [Value]),
    Keyed(&'a Map<String, Value>),
}

impl PayloadShape<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            PayloadShape::FeatureCollection(_) => "GeoJSON FeatureCollection",
            PayloadShape::Array(_) => "array",
            PayloadShape::Keyed(_) => "keyed object",
        }
    }
}

/// `{"type": "FeatureCollection", "features": [...]}`
pub fn has_feature_collection_shape(payload: &Value) -> Option<&[Value]> {
    let object = payload.as_object()?;
    if object.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return None;
    }
    object.get("features")?.as_array().map(Vec::as_slice)
}

pub fn has_array_shape(payload: &Value) -> Option<&[Value]> {
    payload.as_array().map(Vec::as_slice)
}

pub fn has_keyed_object_shape(payload: &Value) -> Option<&Map<String, Value>> {
    payload.as_object()
}

/// Run the shape probes in precedence order.
pub fn classify(payload: &Value) -> Option<PayloadShape<'_>> {
    if let Some(features) = has_feature_collection_shape(payload) {
        return Some(PayloadShape::FeatureCollection(features));
    }
    if let Some(records) = has_array_shape(payload) {
        return Some(PayloadShape::Array(records));
    }
    has_keyed_object_shape(payload).map(PayloadShape::Keyed)
}

/// Map any supported payload to guide items, preserving source order.
pub fn normalize(payload: &Value, options: &NormalizeOptions) -> Vec<GuideItem> {
    let Some(shape) = classify(payload) else {
        warn!("Unrecognised guide payload ({}), using no items", json_kind(payload));
        return Vec::new();
    };

    let items: Vec<GuideItem> = match shape {
        PayloadShape::FeatureCollection(features) => features
            .iter()
            .filter_map(feature_properties)
            .filter(|props| is_spot(props))
            .map(from_geojson_properties)
            .collect(),
        PayloadShape::Array(records) => records
            .iter()
            .filter_map(Value::as_object)
            .filter(|record| is_spot(record))
            .map(from_flat_record)
            .collect(),
        PayloadShape::Keyed(entries) => entries
            .values()
            .filter_map(Value::as_object)
            .filter(|record| record.contains_key(PlainField::ItemId.key()))
            .filter(|record| !options.keyed_requires_category || is_spot(record))
            .map(from_flat_record)
            .collect(),
    };

    debug!("Normalized {} guide items from {} payload", items.len(), shape.label());
    items
}

/// A feature's properties; missing or non-object properties count as empty.
fn feature_properties(feature: &Value) -> Option<&Map<String, Value>> {
    static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();

    let feature = feature.as_object()?;
    Some(
        feature
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or_else(|| EMPTY.get_or_init(Map::new)),
    )
}

fn is_spot(record: &Map<String, Value>) -> bool {
    record.get("category").and_then(Value::as_str) == Some(SPOT_CATEGORY)
}

/// Scalar JSON value as display text. Empty strings, `null`, `false` and
/// containers count as absent.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// First present value among `keys`, else `""`.
fn pick(record: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(text_value))
        .unwrap_or_default()
}

/// Where a source key lands on a [`GuideItem`]
#[derive(Debug, Clone, Copy)]
enum Target {
    Plain(PlainField),
    Text(FieldFamily, Language),
}

struct Alias {
    target: Target,
    sources: &'static [&'static str],
}

const fn plain(field: PlainField, sources: &'static [&'static str]) -> Alias {
    Alias {
        target: Target::Plain(field),
        sources,
    }
}

const fn text(family: FieldFamily, language: Language, sources: &'static [&'static str]) -> Alias {
    Alias {
        target: Target::Text(family, language),
        sources,
    }
}

/// GeoJSON property names per target field, first non-empty wins.
/// Unlisted targets stay empty.
const GEOJSON_ALIASES: &[Alias] = &[
    plain(PlainField::ItemId, &["item_id"]),
    plain(PlainField::MainImageUrl, &["main_image_url"]),
    plain(PlainField::Highlight1ImageUrl, &["highlight_1_image_url"]),
    plain(PlainField::Highlight2ImageUrl, &["highlight_2_image_url"]),
    text(Name, JA, &["title.ja", "title_ja"]),
    text(Name, ZH, &["title_zh_tw"]),
    text(Name, KO, &["title_ko"]),
    text(Name, EN, &["title"]),
    text(CatchyComment, JA, &["catchy_comment_ja"]),
    text(CatchyComment, ZH, &["catchy_comment_zh_tw"]),
    text(CatchyComment, KO, &["catchy_comment_ko"]),
    text(CatchyComment, EN, &["catchy_comment_en"]),
    text(Summary, JA, &["summary_ja"]),
    text(Summary, ZH, &["summary_zh_tw"]),
    text(Summary, KO, &["summary_ko"]),
    text(Summary, EN, &["summary_en"]),
    text(Description, JA, &["guide_description_ja"]),
    text(Description, ZH, &["guide_description_zh_tw"]),
    text(Description, KO, &["guide_description_ko"]),
    text(Description, EN, &["guide_description_en"]),
    text(Highlight1Text, JA, &["highlight_1_text_ja"]),
    text(Highlight1Text, ZH, &["highlight_1_text_zh_tw"]),
    text(Highlight1Text, KO, &["highlight_1_text_ko"]),
    text(Highlight1Text, EN, &["highlight_1_text_en"]),
    text(Highlight2Text, JA, &["highlight_2_text_ja"]),
    text(Highlight2Text, ZH, &["highlight_2_text_zh_tw"]),
    text(Highlight2Text, KO, &["highlight_2_text_ko"]),
    text(Highlight2Text, EN, &["highlight_2_text_en"]),
    text(Address, JA, &["address_ja"]),
    text(Address, ZH, &["address_zh-tw", "address_zh_tw"]),
    text(Address, KO, &["address_ko"]),
    text(Address, EN, &["address"]),
    text(MetaTitle, ZH, &["meta_title_zh_tw"]),
    text(MetaTitle, EN, &["meta_title_en"]),
    text(MetaDescription, ZH, &["meta_description_zh_tw"]),
    text(MetaDescription, EN, &["meta_description_en"]),
];

fn assign(item: &mut GuideItem, target: Target, value: String) {
    match target {
        Target::Plain(field) => *field.of_mut(item) = value,
        Target::Text(family, language) => *family.of_mut(item).get_mut(language) = value,
    }
}

fn from_geojson_properties(props: &Map<String, Value>) -> GuideItem {
    let mut item = GuideItem::default();
    for alias in GEOJSON_ALIASES {
        assign(&mut item, alias.target, pick(props, alias.sources));
    }
    item
}

/// Pre-normalized records use the item's own field names
/// (`item_id`, `name_ja`, `address_zh_tw`, ...).
fn from_flat_record(record: &Map<String, Value>) -> GuideItem {
    let mut item = GuideItem::default();
    for field in PlainField::ALL {
        assign(&mut item, Target::Plain(field), pick(record, &[field.key()]));
    }
    for family in FieldFamily::ALL {
        for language in Language::ALL {
            let key = format!("{}_{}", family.key(), language.field_suffix());
            assign(
                &mut item,
                Target::Text(family, language),
                pick(record, &[key.as_str()]),
            );
        }
    }
    item
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
