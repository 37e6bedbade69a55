// src/state.rs
use crate::config::Config;
use crate::scraper::PageFetcher;
use crate::sessions::SnapshotStore;

/// Everything a request handler needs, shared across worker threads.
pub struct AppState {
    pub config: Config,
    pub fetcher: Box<dyn PageFetcher>,
    pub snapshots: SnapshotStore,
}

impl AppState {
    pub fn new(config: Config, fetcher: Box<dyn PageFetcher>) -> Self {
        let snapshots = SnapshotStore::new(config.max_sessions);
        Self {
            config,
            fetcher,
            snapshots,
        }
    }
}
