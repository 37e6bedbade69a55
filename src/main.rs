use crate::config::Config;
use crate::responses::{html_error_response, status_for};
use crate::router::handle;
use crate::scraper::HttpFetcher;
use crate::state::AppState;
use anyhow::Context;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod pipeline;
mod responses;
mod router;
mod scraper;
mod sessions;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,car_price_compare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let fetcher = HttpFetcher::new(&config.scraper).context("Failed to build HTTP client")?;

    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = Arc::new(AppState::new(config, Box::new(fetcher)));

    tracing::info!("Starting server at http://{addr}");

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &state) {
            Ok(resp) => {
                tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
                resp
            }
            Err(err) => {
                tracing::warn!(
                    %method,
                    %path,
                    status = status_for(&err),
                    error = %err,
                    "request failed"
                );
                html_error_response(err)
            }
        }
    });

    result.context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
