//! Router tests against in-memory providers.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::Mocks;
use growmarkt::web::router;
use std::sync::Arc;
use tower::ServiceExt;

const QUERY: &str = "product_name=Hazelnuts&hs_code=0802&country_code=276&country_name=Germany";
const KEYS: &str = "gemini_key=g&comtrade_key=c&google_key=k&google_cx=cx&hunter_key=h";

async fn send(mocks: &Mocks, req: Request<Body>) -> (StatusCode, String) {
    let app = router(Arc::new(mocks.app()));
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn form_post(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/run")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn json_post(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/run")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_form_page() {
    let mocks = Mocks::happy();
    let req = Request::builder().uri("/?lang=tr").body(Body::empty()).unwrap();
    let (status, html) = send(&mocks, req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("🚀 ARA"));
    assert!(html.contains(r#"value="Hazelnuts""#));
    assert_eq!(mocks.total_calls(), 0);
}

#[tokio::test]
async fn test_submit_renders_all_phases() {
    let mocks = Mocks::happy();
    let (status, html) = send(&mocks, form_post(format!("language=en&{QUERY}&{KEYS}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("✅ Market Data Retrieved Successfully"));
    assert!(html.contains("$1,000,000"));
    assert!(html.contains("$2.00/kg"));
    assert!(html.contains("<td>nuss-import.de</td><td>einkauf@nuss-import.de</td>"));
    assert!(html.contains("<td>trockenfrucht.de</td><td>not public</td>"));
    assert!(html.contains("1. Verdict: Go"));
    // Keys are never echoed back.
    assert!(!html.contains(r#"value="cx""#));
}

#[tokio::test]
async fn test_submit_missing_keys_shows_one_error() {
    let mocks = Mocks::happy();
    let body = format!("language=tr&{QUERY}&gemini_key=g&comtrade_key=&google_key=k&google_cx=cx&hunter_key=h");
    let (status, html) = send(&mocks, form_post(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="notice error""#).count(), 1);
    assert!(html.contains("KRİTİK HATA"));
    assert_eq!(mocks.total_calls(), 0);
}

#[tokio::test]
async fn test_submit_no_buyers_notice() {
    let mocks = Mocks::new(
        Ok(vec![]),
        Ok(vec![]),
        &[],
        &[],
        Ok("No-Go".into()),
    );
    let (_, html) = send(&mocks, form_post(format!("language=en&{QUERY}&{KEYS}"))).await;

    assert!(html.contains("No buyers found."));
    assert!(html.contains("Direct Data unavailable"));
    assert!(html.contains("No-Go"));
}

#[tokio::test]
async fn test_api_run() {
    let mocks = Mocks::happy();
    let body = serde_json::json!({
        "language": "en",
        "product_name": "Hazelnuts", "hs_code": "0802",
        "country_code": "276", "country_name": "Germany",
        "gemini_key": "g", "comtrade_key": "c", "google_key": "k",
        "google_cx": "cx", "hunter_key": "h",
    });
    let (status, text) = send(&mocks, json_post(body)).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["market"]["status"], "retrieved");
    assert_eq!(json["discovery"]["leads"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_api_run_missing_keys() {
    let mocks = Mocks::happy();
    let body = serde_json::json!({
        "product_name": "Hazelnuts", "hs_code": "0802",
        "country_code": "276", "country_name": "Germany",
    });
    let (status, text) = send(&mocks, json_post(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("Gemini API Key"));
    assert_eq!(mocks.total_calls(), 0);
}

#[tokio::test]
async fn test_health() {
    let mocks = Mocks::happy();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, text) = send(&mocks, req).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["max_leads"], 5);
}

#[tokio::test]
async fn test_submitted_fields_are_trimmed() {
    let mocks = Mocks::happy();
    let body = format!(
        "language=en&product_name=+Hazelnuts+&hs_code=0802%20&country_code=%20276&country_name=Germany+&{KEYS}"
    );
    let (status, _) = send(&mocks, form_post(body)).await;
    assert_eq!(status, StatusCode::OK);

    let requests = mocks.stats.requests.lock().unwrap();
    assert_eq!(requests[0].commodity_code, "0802");
    assert_eq!(requests[0].reporter_code, "276");
    let queries = mocks.search.queries.lock().unwrap();
    assert_eq!(queries[0].0, "top Hazelnuts importers distributors Germany -site:pinterest.*");
}
