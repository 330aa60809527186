//! Page payloads handed to the site renderer.

use crate::config::Config;
use crate::i18n::{localized_path, t, Language, UiString};
use crate::localize::{item_path, page_description, page_title, LocalizedView};
use crate::model::GuideItem;
use crate::seo::{
    alternate_links, breadcrumb_list, tourist_attraction, web_page, Breadcrumb, BreadcrumbList,
    LinkTag, TouristAttraction, WebPage,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

/// Everything the renderer needs for one site build
#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
    pub generated_at: DateTime<Utc>,
    /// Items that got a detail page
    pub item_count: usize,
    pub pages: Vec<PagePayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PagePayload {
    pub path: String,
    pub language: Language,
    pub title: String,
    pub description: String,
    pub web_page: WebPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attraction: Option<TouristAttraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<LocalizedView>,
    /// Item views listed on an index page
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listing: Vec<LocalizedView>,
    pub breadcrumbs: BreadcrumbList,
    pub links: Vec<LinkTag>,
}

/// Absolute URL of `path` in every language, base first.
fn language_urls(config: &Config, path: &str) -> Vec<(Language, String)> {
    Language::ALL
        .iter()
        .map(|lang| (*lang, config.absolute_url(&localized_path(path, *lang))))
        .collect()
}

fn links_for(config: &Config, path: &str, language: Language) -> Vec<LinkTag> {
    let urls = language_urls(config, path);
    let pairs: Vec<(Language, &str)> = urls.iter().map(|(l, u)| (*l, u.as_str())).collect();
    let current = config.absolute_url(&localized_path(path, language));
    alternate_links(&pairs, &current)
}

/// Top page for `language`, listing every item.
pub fn index_page(items: &[GuideItem], language: Language, config: &Config) -> PagePayload {
    let path = localized_path("/", language);
    let url = config.absolute_url(&path);
    let title = t(UiString::SiteTitle, language).to_string();
    let description = t(UiString::SiteDescription, language).to_string();

    let listing: Vec<LocalizedView> = items
        .iter()
        .filter(|item| !item.item_id.is_empty())
        .map(|item| LocalizedView::new(item, language))
        .collect();
    let image = listing
        .iter()
        .map(|view| view.main_image_url.as_str())
        .find(|url| !url.is_empty());

    PagePayload {
        web_page: web_page(&title, &description, &url, image, Some(language)),
        breadcrumbs: breadcrumb_list(&[Breadcrumb::new(t(UiString::Home, language), url.as_str())]),
        links: links_for(config, "/", language),
        path,
        language,
        title,
        description,
        attraction: None,
        view: None,
        listing,
    }
}

/// Detail page for one item in `language`.
pub fn item_page(item: &GuideItem, language: Language, config: &Config) -> PagePayload {
    let base_path = item_path(&item.item_id, Language::BASE);
    let view = LocalizedView::new(item, language);
    let url = config.absolute_url(&view.path);
    let home_url = config.absolute_url(&localized_path("/", language));
    let title = page_title(item, language).to_string();
    let description = page_description(item, language).to_string();
    let image = Some(item.main_image_url.as_str()).filter(|u| !u.is_empty());

    PagePayload {
        web_page: web_page(&title, &description, &url, image, Some(language)),
        attraction: Some(tourist_attraction(item, language, &url)),
        breadcrumbs: breadcrumb_list(&[
            Breadcrumb::new(t(UiString::Home, language), home_url),
            Breadcrumb::new(view.name.clone(), url.as_str()),
        ]),
        links: links_for(config, &base_path, language),
        path: view.path.clone(),
        language,
        title,
        description,
        view: Some(view),
        listing: Vec::new(),
    }
}

/// Index and detail pages for every language.
///
/// Items without an `item_id` cannot be addressed and get no detail page.
pub fn build_pages(items: &[GuideItem], config: &Config) -> Vec<PagePayload> {
    let skipped = items.iter().filter(|item| item.item_id.is_empty()).count();
    if skipped > 0 {
        warn!("Skipping {} guide items without item_id", skipped);
    }

    let mut pages = Vec::new();
    for language in Language::ALL {
        pages.push(index_page(items, language, config));
        pages.extend(
            items
                .iter()
                .filter(|item| !item.item_id.is_empty())
                .map(|item| item_page(item, language, config)),
        );
    }

    debug!("Built {} page payloads", pages.len());
    pages
}

pub fn build_manifest(items: &[GuideItem], config: &Config) -> SiteManifest {
    SiteManifest {
        generated_at: Utc::now(),
        item_count: items.iter().filter(|item| !item.item_id.is_empty()).count(),
        pages: build_pages(items, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocalizedText;

    fn config() -> Config {
        Config {
            site_base_url: "https://g.example".to_string(),
            ..Config::default()
        }
    }

    fn items() -> Vec<GuideItem> {
        vec![
            GuideItem {
                item_id: "1".to_string(),
                main_image_url: "https://img.example/1.jpg".to_string(),
                name: LocalizedText {
                    ja: "古宇利島".to_string(),
                    en: "Kouri Island".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
            GuideItem::default(),
        ]
    }

    #[test]
    fn test_build_pages_skips_items_without_id() {
        let pages = build_pages(&items(), &config());

        // One index plus one detail page per language
        assert_eq!(pages.len(), Language::ALL.len() * 2);
        assert!(!pages.iter().any(|p| p.path.ends_with("/spots/")));
    }

    #[test]
    fn test_item_page_english() {
        let items = items();
        let page = item_page(&items[0], Language::English, &config());

        assert_eq!(page.path, "/en/spots/1");
        assert_eq!(page.title, "Kouri Island");
        assert_eq!(page.web_page.url, "https://g.example/en/spots/1");
        assert_eq!(page.web_page.in_language.as_deref(), Some("en"));
        assert_eq!(page.breadcrumbs.item_list_element.len(), 2);
        assert_eq!(page.breadcrumbs.item_list_element[0].name, "Home");
        assert_eq!(page.breadcrumbs.item_list_element[0].item, "https://g.example/en/");
        assert_eq!(page.breadcrumbs.item_list_element[1].name, "Kouri Island");
    }

    #[test]
    fn test_item_page_links_cover_every_language() {
        let items = items();
        let page = item_page(&items[0], Language::Korean, &config());

        let hrefs: Vec<&str> = page.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "https://g.example/spots/1",
                "https://g.example/zh-tw/spots/1",
                "https://g.example/ko/spots/1",
                "https://g.example/en/spots/1",
                "https://g.example/spots/1",
                "https://g.example/ko/spots/1",
            ]
        );
        assert_eq!(page.links.last().unwrap().rel, "canonical");
    }

    #[test]
    fn test_index_page_lists_addressable_items() {
        let page = index_page(&items(), Language::TraditionalChinese, &config());

        assert_eq!(page.path, "/zh-tw/");
        assert_eq!(page.title, "沖繩旅遊指南");
        assert_eq!(page.listing.len(), 1);
        assert_eq!(page.listing[0].name, "古宇利島");
        assert_eq!(page.web_page.image.as_deref(), Some("https://img.example/1.jpg"));
        assert!(page.attraction.is_none());
    }

    #[test]
    fn test_index_page_base_language_at_root() {
        let page = index_page(&[], Language::BASE, &config());
        assert_eq!(page.path, "/");
        assert!(page.listing.is_empty());
        assert!(page.web_page.image.is_none());
    }

    #[test]
    fn test_manifest_serializes() {
        let manifest = build_manifest(&items(), &config());
        let json = serde_json::to_value(&manifest).unwrap();

        // The item without an id has no page and is not counted
        assert_eq!(json["item_count"], 1);
        assert!(json["generated_at"].is_string());
        assert_eq!(json["pages"].as_array().unwrap().len(), 8);
        // Index pages carry no attraction block
        assert!(json["pages"][0].get("attraction").is_none());
    }
}
