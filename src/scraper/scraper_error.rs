use thiserror::Error;

/// Failures while retrieving or reading a source page. None of these are
/// retried; a comparison run that hits one is abandoned.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl ScraperError {
    /// The page that failed, when the error is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            ScraperError::Network { url, .. } | ScraperError::Status { url, .. } => Some(url),
            ScraperError::Client(_) => None,
        }
    }
}
