use crate::config::{Config, ScraperConfig};
use crate::scraper::{PageFetcher, ScraperError};
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const WAB_URL: &str = "http://webautobid.test/lv/auctions";
pub const SS_BASE: &str = "http://ss.test/lv/transport/cars";

pub const WAB_PAGE: &str = r#"
<html><body>
  <div class="carbox"><div class="title">BMW 320 d 2014</div><div class="bid">€9,000.00</div></div>
  <div class="carbox"><div class="title">BMW X5 xDrive 2012</div><div class="bid">€8,000</div></div>
  <div class="carbox"><div class="title">Audi A4 2015</div><div class="bid">€5,000</div></div>
  <div class="carbox"><div class="title">BMW 740</div><div class="bid">€20,000</div></div>
</body></html>
"#;

pub const SS_BMW_PAGE_1: &str = r#"
<html><body><table>
  <tr align="center"><td></td><td></td><td>BMW 320 d 2014</td><td>2014</td><td>11 000 €</td><td>-</td></tr>
  <tr align="center"><td></td><td></td><td>BMW 320 d 2014</td><td>2014</td><td>13 000 €</td><td>-</td></tr>
  <tr align="center"><td></td><td></td><td>BMW 530 2010</td><td>2010</td><td>7.500 €</td><td>-</td></tr>
</table></body></html>
"#;

pub const SS_BMW_PAGE_2: &str = r#"
<html><body><table>
  <tr align="center"><td></td><td></td><td>BMW 118 2009</td><td>2009</td><td>4 200 €</td><td>-</td></tr>
</table></body></html>
"#;

pub const SS_EMPTY_PAGE: &str = "<html><body><table></table></body></html>";

pub const BMW_CSV: &str = "make,model,year,SS.com,WebAutoBid,difference (€)\n\
BMW,118 2009,2009,4200,,4200\n\
BMW,320 d,2014,12000,9000,3000\n\
BMW,X5 xDrive,2012,,8000,-8000\n";

pub fn ss_url(make: &str, page: u32) -> String {
    format!("{SS_BASE}/{make}/sell/page{page}.html")
}

/// Serves canned pages by URL and records every request.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, u16>>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: impl Into<String>, body: &str) -> Self {
        self.pages.insert(url.into(), Ok(body.to_string()));
        self
    }

    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.pages.insert(url.into(), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ScraperError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(ScraperError::Network {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

impl PageFetcher for Arc<FakeFetcher> {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.as_ref().fetch(url)
    }
}

/// WebAutoBid plus two SS.com BMW pages, plus an empty SS.com "lada" page.
pub fn bmw_fetcher() -> FakeFetcher {
    FakeFetcher::default()
        .with_page(WAB_URL, WAB_PAGE)
        .with_page(ss_url("bmw", 1), SS_BMW_PAGE_1)
        .with_page(ss_url("bmw", 2), SS_BMW_PAGE_2)
        .with_page(ss_url("lada", 1), SS_EMPTY_PAGE)
        .with_page(ss_url("lada", 2), SS_EMPTY_PAGE)
}

pub fn test_config() -> Config {
    Config {
        scraper: ScraperConfig {
            webautobid_url: WAB_URL.to_string(),
            ss_base_url: SS_BASE.to_string(),
            ..ScraperConfig::default()
        },
        ..Config::default()
    }
}

/// App state around a shared fake, so tests can inspect the requests made.
pub fn test_state(fetcher: FakeFetcher) -> (AppState, Arc<FakeFetcher>) {
    let fetcher = Arc::new(fetcher);
    let state = AppState::new(test_config(), Box::new(Arc::clone(&fetcher)));
    (state, fetcher)
}
