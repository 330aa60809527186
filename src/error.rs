use thiserror::Error;

/// Terminal failure of a retried fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Invalid call arguments; no network attempt was made.
    #[error("Invalid fetch configuration: {0}")]
    Validation(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Every attempt failed.
    #[error("Failed to fetch data after {attempts} attempts. Last error: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

/// Failure of a single fetch attempt
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} - {text}")]
    Status { status: u16, text: String },

    #[error("Invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}
