use std::sync::Arc;
use serde_json::{json, Value};
use warp::http::StatusCode;
use codequal::enums::ai_provider_error::AiProviderError;
use codequal::server::analysis_server::routes;
use crate::support::{service_with, CountingProvider};

const SYNTAX_REPLY: &str = r#"{"errors": [], "warnings": [{"line": 2, "message": "unused"}], "suggestions": []}"#;

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn post_returns_the_analysis_envelope() {
    let provider = CountingProvider::replying(SYNTAX_REPLY);
    let api = routes(Arc::new(service_with(provider, Some(10))));

    let response = warp::test::request()
        .method("POST")
        .path("/api/syntax")
        .json(&json!({"code": "x = 1\ny = 2", "language": "python"}))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let body = body_json(response.body());
    assert_eq!(body["fallback"], json!(false));
    assert_eq!(body["cached"], json!(false));
    assert_eq!(body["model"], json!("fake-model"));
    assert_eq!(body["analysis"]["warnings"][0]["message"], json!("unused"));
    assert!(body["generatedAt"].is_string());
}

#[tokio::test]
async fn options_preflight_is_accepted() {
    let api = routes(Arc::new(service_with(CountingProvider::replying(SYNTAX_REPLY), None)));

    let response = warp::test::request()
        .method("OPTIONS")
        .path("/api/complexity")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-methods"], "POST, OPTIONS");
}

#[tokio::test]
async fn other_methods_are_rejected_with_405() {
    let provider = CountingProvider::replying(SYNTAX_REPLY);
    let api = routes(Arc::new(service_with(provider.clone(), None)));

    let response = warp::test::request()
        .method("GET")
        .path("/api/syntax")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn missing_fields_and_bad_json_are_400() {
    let provider = CountingProvider::replying(SYNTAX_REPLY);
    let api = routes(Arc::new(service_with(provider.clone(), None)));

    let missing = warp::test::request()
        .method("POST")
        .path("/api/syntax")
        .json(&json!({"code": "x = 1"}))
        .reply(&api)
        .await;
    let malformed = warp::test::request()
        .method("POST")
        .path("/api/syntax")
        .body("{not json")
        .reply(&api)
        .await;

    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(missing.body())["message"].as_str().unwrap().contains("language"));
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(malformed.body())["message"].is_string());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn unknown_kind_is_404() {
    let api = routes(Arc::new(service_with(CountingProvider::replying(SYNTAX_REPLY), None)));

    let response = warp::test::request()
        .method("POST")
        .path("/api/astrology")
        .json(&json!({"code": "x", "language": "python"}))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response.body())["message"].is_string());
}

#[tokio::test]
async fn unknown_path_gets_a_json_404() {
    let provider = CountingProvider::replying(SYNTAX_REPLY);
    let api = routes(Arc::new(service_with(provider.clone(), None)));

    let response = warp::test::request()
        .method("GET")
        .path("/does/not/exist")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(body_json(response.body())["message"], json!("Not found"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn posting_to_health_is_405() {
    let api = routes(Arc::new(service_with(CountingProvider::replying(SYNTAX_REPLY), None)));

    let response = warp::test::request()
        .method("POST")
        .path("/health")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(body_json(response.body())["message"].is_string());
}

#[tokio::test]
async fn upstream_rate_limit_passes_through_as_429() {
    let provider = CountingProvider::failing(AiProviderError::RateLimited {
        retry_after_secs: 42,
        message: "slow down".into(),
    });
    let api = routes(Arc::new(service_with(provider.clone(), None)));

    let response = warp::test::request()
        .method("POST")
        .path("/api/comprehensive")
        .json(&json!({"code": "x = 1", "language": "python"}))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = body_json(response.body());
    assert_eq!(body["error"], json!("rate_limit_exceeded"));
    assert_eq!(body["retryAfter"], json!(42));
    assert!(body["message"].is_string());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn malformed_model_output_still_returns_200() {
    let provider = CountingProvider::replying("I could not analyze this code, sorry.");
    let api = routes(Arc::new(service_with(provider, None)));

    let response = warp::test::request()
        .method("POST")
        .path("/api/improvement")
        .json(&json!({"code": "x = 1", "language": "python"}))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.body());
    assert_eq!(body["fallback"], json!(true));
    assert_eq!(body["analysis"]["diagnostics"][0]["kind"], json!("parse-error"));
}

#[tokio::test]
async fn health_reports_ok() {
    let api = routes(Arc::new(service_with(CountingProvider::replying(SYNTAX_REPLY), None)));

    let response = warp::test::request().path("/health").reply(&api).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.body()), json!({"status": "ok"}));
}
