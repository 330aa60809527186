use crate::config::Config;
use crate::fetcher::GuideFetcher;
use crate::model::GuideItem;
use crate::normalize::{normalize, NormalizeOptions};
use crate::retry::RetryConfig;
use tracing::{error, info};

/// Fetch and normalize the guide dataset.
///
/// Never fails: fetch errors are logged and degrade to an empty list, the
/// same outcome as a payload with an unrecognised shape.
pub async fn fetch_guide_data(config: &Config) -> Vec<GuideItem> {
    let retry = RetryConfig::new(config.max_retries, config.initial_delay);
    let options = NormalizeOptions {
        keyed_requires_category: config.keyed_requires_category,
    };

    let fetcher = match GuideFetcher::new(retry) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Failed to fetch guide data: {}", e);
            return Vec::new();
        }
    };

    match fetcher.fetch_json(&config.data_url).await {
        Ok(payload) => {
            let items = normalize(&payload, &options);
            info!("Loaded {} guide items from {}", items.len(), config.data_url);
            items
        }
        Err(e) => {
            error!("Failed to fetch guide data: {}", e);
            Vec::new()
        }
    }
}
