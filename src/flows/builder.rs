use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::config::AssistantConfig;
use crate::error::Result;
use crate::providers::gemini::{GeminiClient, GeminiConfig};

use super::TextAssistant;

/// Builder for a Gemini-backed [`TextAssistant`].
///
/// ```rust,no_run
/// use textsmith::TextAssistant;
///
/// let assistant = TextAssistant::builder()
///     .api_key("your-api-key")
///     .model("gemini-2.0-flash")
///     .build()?;
/// # Ok::<(), textsmith::AssistantError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextAssistantBuilder {
    config: GeminiConfig,
    http_client: Option<reqwest::Client>,
}

impl TextAssistantBuilder {
    /// Replace the settings collected so far with those from the environment.
    pub fn from_env(self) -> Result<Self> {
        Ok(self.config(AssistantConfig::from_env()?))
    }

    /// Use an already loaded configuration.
    pub fn config(mut self, config: AssistantConfig) -> Self {
        self.config = config.gemini;
        self
    }

    /// Set the Gemini API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the model id
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Transport timeout. Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Use a custom HTTP client
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the assistant. A missing API key is not an error here.
    pub fn build(self) -> Result<TextAssistant> {
        let client = match self.http_client {
            Some(http) => GeminiClient::with_http_client(self.config, http),
            None => GeminiClient::new(self.config)?,
        };
        tracing::debug!(
            model = %client.config().model,
            has_api_key = client.has_api_key(),
            "built text assistant"
        );
        Ok(TextAssistant::new(Arc::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_settings() {
        let assistant = TextAssistant::builder()
            .api_key("k")
            .model("gemini-1.5-flash")
            .base_url("http://localhost:1234")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(assistant.model().model_id(), "gemini-1.5-flash");
        assert_eq!(assistant.model().provider_id(), "gemini");
    }

    #[test]
    fn builder_without_key_still_builds() {
        let assistant = TextAssistant::builder().build().unwrap();
        assert_eq!(assistant.model().model_id(), "gemini-2.0-flash");
    }

    #[test]
    fn explicit_config_replaces_defaults() {
        let mut config = AssistantConfig::default();
        config.gemini.model = "gemini-exp".to_string();
        let assistant = TextAssistant::builder()
            .config(config)
            .http_client(reqwest::Client::new())
            .build()
            .unwrap();
        assert_eq!(assistant.model().model_id(), "gemini-exp");
    }
}
