use crate::errors::ServerError;
use crate::pipeline::{run_comparison, ComparisonSnapshot};
use crate::responses::{
    csv_response, html_response, html_response_with_cookie, json_response, xlsx_response,
    ResultResp,
};
use crate::sessions::{generate_token_default, session_cookie, token_from_cookie_header};
use crate::spreadsheets::{
    export_comparison_csv, export_comparison_xlsx, CSV_FILENAME, XLSX_FILENAME,
};
use crate::state::AppState;
use crate::templates;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

/// Make used when the form carries no `make` field at all.
pub const DEFAULT_MAKE: &str = "BMW";
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, state),
        ("POST", "/") => compare(req, state),
        ("GET", "/download") => download_csv(&req, state),
        ("GET", "/download.xlsx") => download_xlsx(&req, state),
        ("GET", "/comparison.json") => comparison_json(&req, state),
        _ => Err(ServerError::NotFound(format!("No page at {path}"))),
    }
}

fn home(req: &Request, state: &AppState) -> ResultResp {
    let snapshot = current_snapshot(req, state)?;

    let (make, pages) = match &snapshot {
        Some(s) => (s.make_filter.as_str(), s.pages),
        None => ("", state.config.default_pages),
    };

    html_response(templates::pages::home_page(make, pages, snapshot.as_deref()))
}

fn compare(req: Request, state: &AppState) -> ResultResp {
    let existing = session_token(&req);
    let form = read_form(req)?;

    let make = form
        .get("make")
        .cloned()
        .unwrap_or_else(|| DEFAULT_MAKE.to_string());
    let pages = state
        .config
        .resolve_pages(form.get("pages").map(String::as_str));

    let snapshot = run_comparison(
        state.fetcher.as_ref(),
        &state.config.scraper,
        &make,
        pages,
    )
    .map_err(|e| {
        tracing::error!(
            make = %make,
            pages,
            url = e.url().unwrap_or("-"),
            error = %e,
            "comparison failed"
        );
        ServerError::from(e)
    })?;

    let (token, new_cookie) = match existing {
        Some(token) => (token, None),
        None => {
            let token = generate_token_default();
            let cookie = session_cookie(&token);
            (token, Some(cookie))
        }
    };

    let snapshot = state.snapshots.put(&token, snapshot)?;
    tracing::debug!(sessions = state.snapshots.len()?, "snapshot stored");

    html_response_with_cookie(
        templates::pages::home_page(&make, pages, Some(snapshot.as_ref())),
        new_cookie,
    )
}

fn download_csv(req: &Request, state: &AppState) -> ResultResp {
    let snapshot = require_snapshot(req, state)?;
    let buffer = export_comparison_csv(&snapshot.table)?;
    csv_response(buffer, CSV_FILENAME)
}

fn download_xlsx(req: &Request, state: &AppState) -> ResultResp {
    let snapshot = require_snapshot(req, state)?;
    let buffer = export_comparison_xlsx(&snapshot.table)?;
    xlsx_response(buffer, XLSX_FILENAME)
}

fn comparison_json(req: &Request, state: &AppState) -> ResultResp {
    let snapshot = require_snapshot(req, state)?;
    let buffer = serde_json::to_vec_pretty(snapshot.as_ref())
        .map_err(|e| ServerError::ExportError(format!("Failed to encode JSON: {e}")))?;
    json_response(buffer)
}

fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookie_header)
        .map(str::to_string)
}

fn current_snapshot(
    req: &Request,
    state: &AppState,
) -> Result<Option<Arc<ComparisonSnapshot>>, ServerError> {
    match session_token(req) {
        Some(token) => state.snapshots.get(&token),
        None => Ok(None),
    }
}

fn require_snapshot(
    req: &Request,
    state: &AppState,
) -> Result<Arc<ComparisonSnapshot>, ServerError> {
    current_snapshot(req, state)?.ok_or_else(|| {
        ServerError::NotFound("No comparison yet. Run one from the home page first.".into())
    })
}

/// Reads an `application/x-www-form-urlencoded` body. Repeated fields keep
/// their first value.
fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form too large".into()));
    }

    let mut form = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(&buf).into_owned() {
        form.entry(key).or_insert(value);
    }
    Ok(form)
}
