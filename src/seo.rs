//! schema.org structured data and hreflang link sets.
//!
//! Everything here is a pure function returning a `Serialize` struct that
//! the page layer embeds as JSON-LD or renders into `<link>` tags. Optional
//! members are skipped during serialization rather than emitted as `null`.

use crate::i18n::Language;
use crate::localize::resolve;
use crate::model::{FieldFamily, GuideItem};
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

// The guidebook only covers Okinawa
const ADDRESS_LOCALITY: &str = "Okinawa";
const ADDRESS_REGION: &str = "Okinawa Prefecture";
const ADDRESS_COUNTRY: &str = "JP";

/// Input entry for [`breadcrumb_list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TouristAttraction {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "addressLocality")]
    pub address_locality: &'static str,
    #[serde(rename = "addressRegion")]
    pub address_region: &'static str,
    #[serde(rename = "addressCountry")]
    pub address_country: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
}

/// `<link>` tag descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<&'static str>,
    pub href: String,
}

impl LinkTag {
    fn alternate(hreflang: &'static str, href: &str) -> Self {
        Self {
            rel: "alternate",
            hreflang: Some(hreflang),
            href: href.to_string(),
        }
    }

    fn canonical(href: &str) -> Self {
        Self {
            rel: "canonical",
            hreflang: None,
            href: href.to_string(),
        }
    }
}

pub fn breadcrumb_list(items: &[Breadcrumb]) -> BreadcrumbList {
    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: crumb.url.clone(),
            })
            .collect(),
    }
}

pub fn web_page(
    title: &str,
    description: &str,
    url: &str,
    image_url: Option<&str>,
    language: Option<Language>,
) -> WebPage {
    WebPage {
        context: SCHEMA_CONTEXT,
        kind: "WebPage",
        name: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        image: image_url.filter(|u| !u.is_empty()).map(str::to_string),
        in_language: language.map(|lang| lang.code().to_string()),
    }
}

/// `TouristAttraction` for an item rendered in `language`.
///
/// Name and description (the summary) go through the same fallback chain as
/// the page body. The street address does too, and when both the requested
/// and base variants are empty it takes the first non-empty variant, so the
/// address block is present whenever the item has any address at all.
pub fn tourist_attraction(item: &GuideItem, language: Language, url: &str) -> TouristAttraction {
    let street_address = any_address(item, language);

    TouristAttraction {
        context: SCHEMA_CONTEXT,
        kind: "TouristAttraction",
        name: resolve(item, FieldFamily::Name, language).to_string(),
        description: resolve(item, FieldFamily::Summary, language).to_string(),
        url: url.to_string(),
        image: (!item.main_image_url.is_empty()).then(|| item.main_image_url.clone()),
        address: (!street_address.is_empty()).then(|| PostalAddress {
            kind: "PostalAddress",
            address_locality: ADDRESS_LOCALITY,
            address_region: ADDRESS_REGION,
            address_country: ADDRESS_COUNTRY,
            street_address: street_address.to_string(),
        }),
    }
}

fn any_address(item: &GuideItem, language: Language) -> &str {
    match resolve(item, FieldFamily::Address, language) {
        "" => Language::ALL
            .iter()
            .map(|lang| item.address.get(*lang))
            .find(|address| !address.is_empty())
            .unwrap_or(""),
        address => address,
    }
}

/// Alternate links for each `(language, url)` pair, an `x-default` pointing
/// at the first pair, then the canonical link for the current page.
pub fn alternate_links(urls: &[(Language, &str)], current_url: &str) -> Vec<LinkTag> {
    let mut links: Vec<LinkTag> = urls
        .iter()
        .map(|(lang, href)| LinkTag::alternate(lang.hreflang(), href))
        .collect();

    if let Some((_, default_url)) = urls.first() {
        links.push(LinkTag::alternate("x-default", default_url));
    }
    links.push(LinkTag::canonical(current_url));
    links
}

/// Two-language form of [`alternate_links`]; `default` is also the
/// `x-default`.
pub fn hreflang_links(
    default: (Language, &str),
    alternate: (Language, &str),
    current_url: &str,
) -> Vec<LinkTag> {
    alternate_links(&[default, alternate], current_url)
}
