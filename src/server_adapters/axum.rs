//! Axum router for the three flows
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use textsmith::TextAssistant;
//! use textsmith::server_adapters::axum::router;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assistant = Arc::new(TextAssistant::from_env()?);
//!     let app = router(assistant);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! Status mapping: validation 422, configuration 503, model invocation 502.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde::Serialize;

use crate::error::{AssistantError, ErrorKind, Flow, summarize_error};
use crate::flows::TextAssistant;
use crate::server_adapters::ErrorResponseOptions;
use crate::types::{GenerationRequest, ImprovementRequest, SummarizationRequest};

#[derive(Clone)]
struct AppState {
    assistant: Arc<TextAssistant>,
    options: ErrorResponseOptions,
}

/// Router with production error masking.
pub fn router(assistant: Arc<TextAssistant>) -> Router {
    router_with_options(assistant, ErrorResponseOptions::production())
}

pub fn router_with_options(assistant: Arc<TextAssistant>, options: ErrorResponseOptions) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/summarize", post(summarize))
        .route("/api/improve", post(improve))
        .with_state(AppState { assistant, options })
}

async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let result = async {
        let request = GenerationRequest::from_json(parse_body(&body)?)?;
        state.assistant.generate(request).await
    }
    .await;
    respond(result, Flow::Generate, &state.options)
}

async fn summarize(State(state): State<AppState>, body: Bytes) -> Response {
    let result = async {
        let request = SummarizationRequest::from_json(parse_body(&body)?)?;
        state.assistant.summarize(request).await
    }
    .await;
    respond(result, Flow::Summarize, &state.options)
}

async fn improve(State(state): State<AppState>, body: Bytes) -> Response {
    let result = async {
        let request = ImprovementRequest::from_json(parse_body(&body)?)?;
        state.assistant.improve(request).await
    }
    .await;
    respond(result, Flow::Improve, &state.options)
}

fn parse_body(body: &[u8]) -> Result<serde_json::Value, AssistantError> {
    serde_json::from_slice(body)
        .map_err(|e| AssistantError::validation("request", format!("is not valid JSON: {e}")))
}

fn respond<T: Serialize>(
    result: Result<T, AssistantError>,
    flow: Flow,
    options: &ErrorResponseOptions,
) -> Response {
    match result {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(err) => error_response(&err, flow, options),
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorPayload,
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    kind: &'static str,
    title: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

fn error_response(err: &AssistantError, flow: Flow, options: &ErrorResponseOptions) -> Response {
    let status = match err {
        AssistantError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AssistantError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        AssistantError::ModelInvocation { .. } => StatusCode::BAD_GATEWAY,
    };
    if !err.is_validation() {
        tracing::error!(flow = flow.as_str(), status = status.as_u16(), error = %err, "request failed");
    }

    let summary = summarize_error(err, flow);
    let detail = (!options.mask_errors && !err.is_validation()).then(|| err.to_string());
    let body = ErrorBody {
        error: ErrorPayload {
            kind: kind_str(summary.kind),
            title: summary.title,
            message: summary.message,
            field: summary.field,
            detail,
        },
    };
    (status, Json(body)).into_response()
}

const fn kind_str(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "validation",
        ErrorKind::Configuration => "configuration",
        ErrorKind::Client => "client",
        ErrorKind::Server => "server",
        ErrorKind::Network => "network",
        ErrorKind::Parsing => "parsing",
    }
}
