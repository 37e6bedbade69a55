use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{bmw_fetcher, test_state, BMW_CSV};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn run_bmw_comparison(state: &AppState, cookie: &str) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Cookie", cookie)
        .body(Body::from(b"make=BMW&pages=2".to_vec()))
        .unwrap();

    let resp = handle(req, state).expect("Comparison failed");
    assert_eq!(resp.status(), 200);
}

fn get(state: &AppState, uri: &str, cookie: Option<&str>) -> Result<Response, ServerError> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    handle(builder.body(Body::empty()).unwrap(), state)
}

fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

#[test]
fn download_returns_csv_of_last_comparison() {
    let (state, _) = test_state(bmw_fetcher());
    run_bmw_comparison(&state, "session=abc");

    let resp = get(&state, "/download", Some("session=abc")).expect("Download failed");

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/csv"));
    assert_eq!(
        header(&resp, "Content-Disposition"),
        r#"attachment; filename="car_price_comparison.csv""#
    );

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert_eq!(body, BMW_CSV);
}

#[test]
fn download_without_comparison_is_not_found() {
    let (state, _) = test_state(bmw_fetcher());

    let err = get(&state, "/download", None).err().expect("request should fail");
    assert!(matches!(err, ServerError::NotFound(_)));
}

#[test]
fn sessions_do_not_see_each_other() {
    let (state, _) = test_state(bmw_fetcher());
    run_bmw_comparison(&state, "session=abc");

    let err = get(&state, "/download", Some("session=other")).err().expect("request should fail");
    assert!(matches!(err, ServerError::NotFound(_)));
}

#[test]
fn home_shows_last_comparison_for_session() {
    let (state, fetcher) = test_state(bmw_fetcher());
    run_bmw_comparison(&state, "session=abc");
    let calls_after_run = fetcher.calls().len();

    let resp = get(&state, "/", Some("session=abc")).unwrap();

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert!(body.contains("Comparison Result"));
    assert!(body.contains(r#"value="BMW""#));
    assert_eq!(fetcher.calls().len(), calls_after_run, "no re-fetch on GET");
}

#[test]
fn xlsx_download_is_attachment() {
    let (state, _) = test_state(bmw_fetcher());
    run_bmw_comparison(&state, "session=abc");

    let resp = get(&state, "/download.xlsx", Some("session=abc")).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Disposition").contains("car_price_comparison.xlsx"));

    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    assert!(body.starts_with(b"PK"));
}

#[test]
fn json_exposes_rows_and_sources() {
    let (state, _) = test_state(bmw_fetcher());
    run_bmw_comparison(&state, "session=abc");

    let resp = get(&state, "/comparison.json", Some("session=abc")).unwrap();
    assert!(header(&resp, "Content-Type").starts_with("application/json"));

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["make_filter"], "BMW");
    assert_eq!(json["table"]["sources"][0], "SS.com");
    assert_eq!(json["table"]["rows"][1]["model"], "320 d");
    assert_eq!(json["table"]["rows"][1]["prices"]["WebAutoBid"], 9000.0);
    assert_eq!(json["table"]["rows"][2]["difference"], -8000.0);
}
