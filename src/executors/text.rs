//! Text executor
//!
//! One POST per call: transform, send, check status, parse, extract.

use std::sync::Arc;

use reqwest::header::HeaderMap;

use crate::error::AssistantError;
use crate::transformers::{RequestTransformer, ResponseTransformer};
use crate::types::ModelCall;

#[async_trait::async_trait]
pub trait TextExecutor: Send + Sync {
    async fn execute(&self, call: ModelCall) -> Result<String, AssistantError>;
}

/// Generic HTTP-based TextExecutor that wires transformers and HTTP
pub struct HttpTextExecutor {
    pub provider_id: String,
    pub http_client: reqwest::Client,
    pub request_transformer: Arc<dyn RequestTransformer>,
    pub response_transformer: Arc<dyn ResponseTransformer>,
    // Strategy hooks
    pub build_url: Box<dyn Fn() -> String + Send + Sync>,
    pub build_headers: Box<dyn Fn() -> Result<HeaderMap, AssistantError> + Send + Sync>,
}

#[async_trait::async_trait]
impl TextExecutor for HttpTextExecutor {
    async fn execute(&self, call: ModelCall) -> Result<String, AssistantError> {
        let body = self.request_transformer.transform_call(&call)?;
        let url = (self.build_url)();
        let headers = (self.build_headers)()?;

        tracing::debug!(
            provider = %self.provider_id,
            transformer = self.request_transformer.provider_id(),
            %url,
            output = call.output.key(),
            seeded = call.sampling.seed.is_some(),
            "sending model request"
        );

        let resp = self
            .http_client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(provider = %self.provider_id, status = status.as_u16(), "model endpoint returned an error status");
            return Err(AssistantError::invocation_status(status.as_u16(), text));
        }

        let text = resp.text().await?;
        let json: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            AssistantError::invocation_with_source("failed to parse response JSON", e)
        })?;
        self.response_transformer
            .transform_response(&json, call.output)
            .inspect_err(|err| {
                tracing::warn!(
                    provider = self.response_transformer.provider_id(),
                    field = call.output.key(),
                    error = %err,
                    "could not decode model output"
                );
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::compose_summarization;
    use crate::types::{OutputField, SamplingConfig};
    use serde_json::json;
    use tracing_test::traced_test;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct EchoRequest;

    impl RequestTransformer for EchoRequest {
        fn provider_id(&self) -> &str {
            "echo"
        }

        fn transform_call(&self, call: &ModelCall) -> Result<serde_json::Value, AssistantError> {
            Ok(json!({ "prompt": call.prompt }))
        }
    }

    struct FieldResponse;

    impl ResponseTransformer for FieldResponse {
        fn provider_id(&self) -> &str {
            "echo"
        }

        fn transform_response(
            &self,
            raw: &serde_json::Value,
            field: OutputField,
        ) -> Result<String, AssistantError> {
            raw.get(field.key())
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| AssistantError::invocation(format!("missing `{}`", field.key())))
        }
    }

    fn executor(server: &MockServer) -> HttpTextExecutor {
        let url = format!("{}/run", server.uri());
        HttpTextExecutor {
            provider_id: "echo".to_string(),
            http_client: reqwest::Client::new(),
            request_transformer: Arc::new(EchoRequest),
            response_transformer: Arc::new(FieldResponse),
            build_url: Box::new(move || url.clone()),
            build_headers: Box::new(|| Ok(HeaderMap::new())),
        }
    }

    fn call() -> ModelCall {
        ModelCall::new(
            compose_summarization("hello"),
            SamplingConfig::new(0.7, 150, 0.9),
            OutputField::Summary,
        )
    }

    #[tokio::test]
    async fn extracts_field_from_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "ok" })))
            .mount(&server)
            .await;

        assert_eq!(executor(&server).execute(call()).await.unwrap(), "ok");
    }

    #[tokio::test]
    #[traced_test]
    async fn decode_failures_are_logged_with_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "other": "x" })))
            .mount(&server)
            .await;

        let err = executor(&server).execute(call()).await.unwrap_err();
        assert!(err.is_model_invocation());
        assert!(logs_contain("could not decode model output"));
        assert!(logs_contain("echo"));
    }

    #[tokio::test]
    async fn non_json_body_is_an_invocation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = executor(&server).execute(call()).await.unwrap_err();
        assert!(err.is_model_invocation());
        assert_eq!(err.status_code(), None);
    }
}
