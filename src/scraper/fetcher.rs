// fetcher.rs
use crate::config::ScraperConfig;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Instant;

/// Retrieves the markup behind a URL.
///
/// Extraction never talks to the network directly, so adapters can be fed
/// fixture pages.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let start = Instant::now();
        let network = |e: reqwest::Error| ScraperError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        let resp = self.client.get(url).send().map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "page fetch rejected");
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = resp.text().map_err(network)?;

        tracing::info!(
            url,
            bytes = text.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "page fetched"
        );

        Ok(text)
    }
}
