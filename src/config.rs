//! Process-wide configuration
//!
//! Read once at start-up. A missing credential is logged but not fatal: the
//! assistant still builds, and every model call then fails fast with a
//! configuration error.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::{AssistantError, Result};
use crate::providers::gemini::GeminiConfig;

/// Credential variables, in lookup order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GOOGLE_GENAI_API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY"];
pub const MODEL_ENV: &str = "TEXTSMITH_MODEL";
pub const BASE_URL_ENV: &str = "TEXTSMITH_BASE_URL";
pub const TIMEOUT_ENV: &str = "TEXTSMITH_TIMEOUT_SECS";

#[derive(Debug, Clone, Default)]
pub struct AssistantConfig {
    pub gemini: GeminiConfig,
}

impl AssistantConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` (an environment-like getter).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut gemini = GeminiConfig::default();

        match API_KEY_ENV_VARS.iter().find_map(|key| get(key).map(|v| (*key, v))) {
            Some((source, key)) => {
                tracing::debug!(source, "loaded Gemini API key");
                gemini.api_key = Some(SecretString::from(key));
            }
            None => {
                tracing::error!(
                    "GOOGLE_GENAI_API_KEY is not set; AI features will not work until it is configured"
                );
            }
        }

        if let Some(model) = get(MODEL_ENV) {
            gemini.model = model;
        }
        if let Some(base_url) = get(BASE_URL_ENV) {
            gemini.base_url = base_url;
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AssistantError::configuration(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got `{raw}`"
                ))
            })?;
            gemini.timeout = Some(Duration::from_secs(secs));
        }

        Ok(Self { gemini })
    }

    /// Whether a credential was found.
    pub fn has_api_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn primary_key_variable_wins() {
        let config = AssistantConfig::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "fallback"),
            ("GOOGLE_GENAI_API_KEY", "primary"),
        ]))
        .unwrap();
        let key = config.gemini.api_key.unwrap();
        assert_eq!(key.expose_secret(), "primary");
    }

    #[test]
    fn fallback_key_variables_are_used() {
        let config =
            AssistantConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "alt")])).unwrap();
        assert!(config.has_api_key());
    }

    #[test]
    #[traced_test]
    fn missing_key_is_logged_not_fatal() {
        let config = AssistantConfig::from_lookup(lookup(&[("GOOGLE_GENAI_API_KEY", "  ")]))
            .unwrap();
        assert!(!config.has_api_key());
        assert!(logs_contain("GOOGLE_GENAI_API_KEY is not set"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AssistantConfig::from_lookup(lookup(&[
            (MODEL_ENV, "gemini-1.5-pro"),
            (BASE_URL_ENV, "http://localhost:8080"),
            (TIMEOUT_ENV, "45"),
        ]))
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(config.gemini.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn bad_timeout_is_a_configuration_error() {
        let err = AssistantConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(err.is_configuration());
    }
}
