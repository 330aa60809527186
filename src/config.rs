use anyhow::{bail, Context, Result};
use std::time::Duration;

pub const DEFAULT_DATA_URL: &str =
    "https://s3geojsonnew.s3.ap-southeast-2.amazonaws.com/Geojson3.23.geojson";
pub const DEFAULT_SITE_BASE_URL: &str = "https://okinawa-guide.example";

/// Deployment environment. Only affects log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Default `tracing` directive for this environment
    pub fn log_directive(&self) -> &'static str {
        if self.is_development() {
            "okinawa_guide=debug"
        } else {
            "okinawa_guide=info"
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Dataset
    pub data_url: String,
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub keyed_requires_category: bool,

    // Site
    pub site_base_url: String,
    pub output_path: Option<String>,

    pub environment: Environment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            keyed_requires_category: true,
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            output_path: None,
            environment: Environment::Production,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_retries = match std::env::var("GUIDE_MAX_RETRIES") {
            Ok(v) => v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("GUIDE_MAX_RETRIES is not a valid number: {}", v))?,
            Err(_) => defaults.max_retries,
        };
        if max_retries == 0 {
            bail!("GUIDE_MAX_RETRIES must be at least 1");
        }

        let initial_delay = match std::env::var("GUIDE_INITIAL_DELAY_MS") {
            Ok(v) => Duration::from_millis(
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("GUIDE_INITIAL_DELAY_MS is not a valid number: {}", v))?,
            ),
            Err(_) => defaults.initial_delay,
        };

        let keyed_requires_category = match std::env::var("GUIDE_KEYED_CATEGORY_FILTER") {
            Ok(v) => parse_bool(&v)
                .with_context(|| format!("GUIDE_KEYED_CATEGORY_FILTER is not a boolean: {}", v))?,
            Err(_) => defaults.keyed_requires_category,
        };

        let environment = match std::env::var("GUIDE_ENV") {
            Ok(v) => parse_environment(&v)?,
            Err(_) => defaults.environment,
        };

        Ok(Self {
            data_url: std::env::var("GUIDE_DATA_URL").unwrap_or(defaults.data_url),
            max_retries,
            initial_delay,
            keyed_requires_category,
            site_base_url: std::env::var("SITE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_base_url),
            output_path: std::env::var("GUIDE_OUTPUT").ok().filter(|p| !p.is_empty()),
            environment,
        })
    }

    /// Join a site-relative path onto the configured base URL
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_base_url, path)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_environment(value: &str) -> Result<Environment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" => Ok(Environment::Development),
        "production" | "prod" => Ok(Environment::Production),
        other => bail!("GUIDE_ENV must be 'development' or 'production', got '{}'", other),
    }
}
