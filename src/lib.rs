//! Data pipeline for the Okinawa guidebook static site.
//!
//! Fetches the guide dataset, normalizes it into [`model::GuideItem`]s,
//! resolves per-language views and builds the SEO payload for each page.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod guide;
pub mod i18n;
pub mod localize;
pub mod model;
pub mod normalize;
pub mod pages;
pub mod retry;
pub mod seo;

pub use guide::fetch_guide_data;
