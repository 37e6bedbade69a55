use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{bmw_fetcher, ss_url, test_state, WAB_URL};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn post_form(
    state: &AppState,
    form: &str,
    cookie: Option<&str>,
) -> Result<Response, ServerError> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    let req = builder.body(Body::from(form.as_bytes().to_vec())).unwrap();

    handle(req, state)
}

fn body_of(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn session_from(resp: &Response) -> String {
    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .expect("new session should get a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[test]
fn compare_renders_table_and_issues_session() {
    let (state, fetcher) = test_state(bmw_fetcher());

    let resp = post_form(&state, "make=BMW&pages=2", None).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let cookie = session_from(&resp);
    assert!(cookie.starts_with("session="));

    let body = body_of(resp);
    assert!(body.contains("Comparison Result"));
    assert!(body.contains("320 d"));
    assert!(body.contains("X5 xDrive"));
    assert!(body.contains("12000"));
    assert!(body.contains("-8000"));
    assert!(body.contains("n/a"));
    assert!(body.contains(r#"href="/download""#));

    assert_eq!(
        fetcher.calls(),
        vec![WAB_URL.to_string(), ss_url("bmw", 1), ss_url("bmw", 2)]
    );
}

#[test]
fn existing_session_is_reused() {
    let (state, _) = test_state(bmw_fetcher());

    let resp = post_form(&state, "make=BMW&pages=2", Some("session=abc")).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert_eq!(state.snapshots.get("abc").unwrap().unwrap().make_filter, "BMW");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let (state, fetcher) = test_state(bmw_fetcher());

    let resp = post_form(&state, "", None).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        fetcher.calls(),
        vec![WAB_URL.to_string(), ss_url("bmw", 1), ss_url("bmw", 2)]
    );
}

#[test]
fn invalid_page_count_uses_default() {
    let (state, fetcher) = test_state(bmw_fetcher());

    post_form(&state, "make=bmw&pages=lots", None).unwrap();

    assert_eq!(fetcher.calls().len(), 3);
}

#[test]
fn empty_result_still_renders_headers() {
    let (state, _) = test_state(bmw_fetcher());

    let resp = post_form(&state, "make=Lada&pages=2", None).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_of(resp);
    assert!(body.contains("SS.com"));
    assert!(body.contains("WebAutoBid"));
    assert!(body.contains("difference (€)"));
    assert!(body.contains("No matching listings found."));
}

#[test]
fn fetch_failure_is_bad_gateway_and_keeps_previous_result() {
    let (state, _) = test_state(bmw_fetcher());

    post_form(&state, "make=BMW&pages=2", Some("session=abc")).unwrap();

    // no fixtures for audi pages
    let err = post_form(&state, "make=Audi&pages=2", Some("session=abc")).err().expect("request should fail");
    assert!(matches!(err, ServerError::Upstream(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 502);
    let body = body_of(resp);
    assert!(body.contains("Could not load listings"));
    assert!(body.contains(&ss_url("audi", 1)));

    let kept = state.snapshots.get("abc").unwrap().unwrap();
    assert_eq!(kept.make_filter, "BMW");
}
