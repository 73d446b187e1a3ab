//! Gemini Client Implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::AssistantError;
use crate::executors::{HttpTextExecutor, TextExecutor};
use crate::traits::TextModel;
use crate::types::ModelCall;

use super::config::GeminiConfig;
use super::transformers::{GeminiRequestTransformer, GeminiResponseTransformer};

/// Gemini client implementing [`TextModel`].
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration
    pub fn new(config: GeminiConfig) -> Result<Self, AssistantError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            AssistantError::configuration(format!("Failed to create HTTP client: {e}"))
        })?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a new Gemini client with a custom HTTP client
    pub fn with_http_client(config: GeminiConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn executor(&self, api_key: SecretString) -> HttpTextExecutor {
        let url = self.config.generate_content_url();
        HttpTextExecutor {
            provider_id: "gemini".to_string(),
            http_client: self.http_client.clone(),
            request_transformer: Arc::new(GeminiRequestTransformer),
            response_transformer: Arc::new(GeminiResponseTransformer),
            build_url: Box::new(move || url.clone()),
            build_headers: Box::new(move || gemini_headers(&api_key)),
        }
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }

    async fn invoke(&self, call: ModelCall) -> Result<String, AssistantError> {
        let Some(api_key) = self.config.api_key.clone() else {
            return Err(AssistantError::configuration(
                "no Gemini API key configured; set GOOGLE_GENAI_API_KEY",
            ));
        };
        self.executor(api_key).execute(call).await
    }
}

fn gemini_headers(api_key: &SecretString) -> Result<HeaderMap, AssistantError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut key = HeaderValue::from_str(api_key.expose_secret())
        .map_err(|_| AssistantError::configuration("API key contains invalid header characters"))?;
    key.set_sensitive(true);
    headers.insert("x-goog-api-key", key);
    Ok(headers)
}
