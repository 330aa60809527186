//! Preview binary - prints one guide item as each language would render it
//!
//! Usage:
//!   cargo run --bin preview -- <item_id>          # All languages
//!   cargo run --bin preview -- <item_id> ko       # One language
//!
//! Reads the same environment variables as the main binary
//! (GUIDE_DATA_URL, GUIDE_MAX_RETRIES, ...).

use anyhow::{bail, Context, Result};
use okinawa_guide::config::Config;
use okinawa_guide::fetch_guide_data;
use okinawa_guide::i18n::Language;
use okinawa_guide::localize::{page_title, LocalizedView};
use okinawa_guide::seo::tourist_attraction;
use tracing::info;

fn print_view(view: &LocalizedView, title: &str) {
    let language = view.language;
    println!(
        "\n========== {} {} / {} ({}) ==========",
        language.flag(),
        language.native_name(),
        language.name(),
        view.path
    );
    println!("Title:       {}", title);
    println!("Name:        {}", view.name);
    if !view.catchy_comment.is_empty() {
        println!("Catchphrase: {}", view.catchy_comment);
    }
    println!("Summary:     {}", view.summary);
    println!("Address:     {}", view.address);
    for (index, text) in [&view.highlight_1_text, &view.highlight_2_text]
        .iter()
        .enumerate()
    {
        if !text.is_empty() {
            println!("Highlight {}: {}", index + 1, text);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.environment.log_directive().parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let item_id = args.first().context("Usage: preview <item_id> [language]")?;
    let languages = match args.get(1) {
        Some(code) => vec![Language::from_code(code)?],
        None => Language::ALL.to_vec(),
    };

    let items = fetch_guide_data(&config).await;
    info!("Fetched {} guide items", items.len());

    let Some(item) = items.iter().find(|item| &item.item_id == item_id) else {
        bail!("No guide item with id '{}' ({} items loaded)", item_id, items.len());
    };

    for language in languages {
        let view = LocalizedView::new(item, language);
        print_view(&view, page_title(item, language));

        let url = config.absolute_url(&view.path);
        let attraction = tourist_attraction(item, language, &url);
        println!(
            "JSON-LD:\n{}",
            serde_json::to_string_pretty(&attraction).context("Failed to serialize JSON-LD")?
        );
    }

    Ok(())
}
