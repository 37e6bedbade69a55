// src/config.rs
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_WEBAUTOBID_URL: &str = "https://www.webautobid.eu/lv/auctions";
pub const DEFAULT_SS_BASE_URL: &str = "https://www.ss.com/lv/transport/cars";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub scraper: ScraperConfig,
    /// Page count used when the form value is missing or invalid.
    pub default_pages: u32,
    /// Upper bound for SS.com pages per comparison.
    pub max_pages: u32,
    /// How many session snapshots are kept before the oldest is evicted.
    pub max_sessions: usize,
}

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub webautobid_url: String,
    pub ss_base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            webautobid_url: DEFAULT_WEBAUTOBID_URL.to_string(),
            ss_base_url: DEFAULT_SS_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            scraper: ScraperConfig::default(),
            default_pages: 2,
            max_pages: 10,
            max_sessions: 256,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let config = Self {
            bind_addr: parse_var("BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_var("MAX_WORKERS", defaults.max_workers)?,
            scraper: ScraperConfig {
                webautobid_url: env::var("WEBAUTOBID_URL")
                    .unwrap_or(defaults.scraper.webautobid_url),
                ss_base_url: env::var("SS_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.scraper.ss_base_url),
                user_agent: env::var("SCRAPER_USER_AGENT").unwrap_or(defaults.scraper.user_agent),
                timeout: Duration::from_secs(parse_var(
                    "SCRAPER_TIMEOUT_SECS",
                    defaults.scraper.timeout.as_secs(),
                )?),
            },
            default_pages: parse_var("DEFAULT_PAGES", defaults.default_pages)?,
            max_pages: parse_var("MAX_PAGES", defaults.max_pages)?,
            max_sessions: parse_var("MAX_SESSIONS", defaults.max_sessions)?,
        };

        anyhow::ensure!(config.default_pages >= 1, "DEFAULT_PAGES must be at least 1");
        anyhow::ensure!(
            config.max_pages >= config.default_pages,
            "MAX_PAGES must not be lower than DEFAULT_PAGES"
        );
        anyhow::ensure!(config.max_sessions >= 1, "MAX_SESSIONS must be at least 1");

        Ok(config)
    }

    /// Page count for a comparison request: missing, unparsable or
    /// non-positive values fall back to the default, large ones are capped.
    pub fn resolve_pages(&self, requested: Option<&str>) -> u32 {
        let pages = requested
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|&n| n >= 1)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(self.default_pages);

        if pages > self.max_pages {
            tracing::warn!(pages, max = self.max_pages, "page count capped");
            return self.max_pages;
        }
        pages
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid value, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
