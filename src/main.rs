use anyhow::{Context, Result};
use okinawa_guide::{
    config::Config, fetch_guide_data, i18n::LanguageRegistry, pages::build_manifest,
};
use std::io::Write;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the manifest
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.environment.log_directive().parse()?),
        )
        .init();

    info!("Building guide manifest from {}", config.data_url);
    let codes: Vec<&str> = LanguageRegistry::get()
        .list_all()
        .iter()
        .map(|lang| lang.code)
        .collect();
    info!("Publishing languages: {}", codes.join(", "));

    let items = fetch_guide_data(&config).await;
    if items.is_empty() {
        warn!("No guide items available, emitting index pages only");
    }

    let manifest = build_manifest(&items, &config);
    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
            info!("Wrote {} pages to {}", manifest.pages.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write manifest to stdout")?;
        }
    }

    Ok(())
}
