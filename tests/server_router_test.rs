//! End-to-end router test: axum handler -> flow -> Gemini mock.
#![cfg(feature = "server-adapters")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use textsmith::TextAssistant;
use textsmith::server_adapters::axum::router;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_generate_route_reaches_gemini() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "generationConfig": { "seed": 7, "maxOutputTokens": 64 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"generatedText\":\"A tale.\"}" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let assistant = TextAssistant::builder()
        .api_key("k")
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    let app = router(Arc::new(assistant));

    let response = app
        .oneshot(
            Request::post("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "prompt": "a tale", "seed": 7, "maxTokens": 64 }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "generatedText": "A tale." }));
}

#[tokio::test]
async fn test_missing_key_maps_to_503() {
    let assistant = TextAssistant::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let response = router(Arc::new(assistant))
        .oneshot(
            Request::post("/api/summarize")
                .body(Body::from(r#"{"text":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
