//! Raw requests and their validated counterparts.
//!
//! Raw requests mirror what a UI or HTTP client sends: the text plus optional
//! tunables. Numeric fields are `f64` so integer-kind checks can reject values
//! such as `maxTokens: 2.5` instead of truncating them. Validation lives in
//! [`crate::params::validator`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::params::validator::{
    MAX_TOKENS_MAX, MAX_TOKENS_MIN, PENALTY_MAX, PENALTY_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
    TOP_P_MAX, TOP_P_MIN,
};
use crate::types::{PromptInstructionFlags, SamplingConfig};

/// Text generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// The prompt to generate text from.
    pub prompt: String,
    /// Optional story theme value (e.g. `"sci-fi"`); `"none"` or empty means no theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = TEMPERATURE_MIN, max = TEMPERATURE_MAX))]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = MAX_TOKENS_MIN, max = MAX_TOKENS_MAX))]
    pub max_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = TOP_P_MIN, max = TOP_P_MAX))]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = PENALTY_MIN, max = PENALTY_MAX))]
    pub presence_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = PENALTY_MIN, max = PENALTY_MAX))]
    pub frequency_penalty: Option<f64>,
    /// Kept as the JSON number it arrived as so large integers stay exact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<serde_json::Number>,
}

impl GenerationRequest {
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 250;
    pub const DEFAULT_TOP_P: f64 = 0.9;
    pub const DEFAULT_PRESENCE_PENALTY: f64 = 0.0;
    pub const DEFAULT_FREQUENCY_PENALTY: f64 = 0.0;

    /// Create a request with every tunable left at its default.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Set the story theme value.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the sampling temperature, in [0, 1].
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens.
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens as f64);
        self
    }

    /// Set nucleus sampling probability, in [0, 1].
    pub const fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set the presence penalty, in [-2, 2]. Only its sign is used.
    pub const fn presence_penalty(mut self, penalty: f64) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    /// Set the frequency penalty, in [-2, 2]. Only its sign is used.
    pub const fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    /// Set the decoding seed, forwarded unchanged.
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(serde_json::Number::from(seed));
        self
    }
}

/// Summarization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationRequest {
    /// The text to summarize.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = TEMPERATURE_MIN, max = TEMPERATURE_MAX))]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = MAX_TOKENS_MIN, max = MAX_TOKENS_MAX))]
    pub max_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = TOP_P_MIN, max = TOP_P_MAX))]
    pub top_p: Option<f64>,
}

impl SummarizationRequest {
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 150;
    pub const DEFAULT_TOP_P: f64 = 0.9;

    /// Create a request with every tunable left at its default.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the sampling temperature, in [0, 1].
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens.
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens as f64);
        self
    }

    /// Set nucleus sampling probability, in [0, 1].
    pub const fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// Text improvement request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRequest {
    /// The text to improve.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = TEMPERATURE_MIN, max = TEMPERATURE_MAX))]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = MAX_TOKENS_MIN, max = MAX_TOKENS_MAX))]
    pub max_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = TOP_P_MIN, max = TOP_P_MAX))]
    pub top_p: Option<f64>,
}

impl ImprovementRequest {
    pub const DEFAULT_TEMPERATURE: f64 = 0.5;
    pub const DEFAULT_MAX_TOKENS: u32 = 250;
    pub const DEFAULT_TOP_P: f64 = 0.9;

    /// Create a request with every tunable left at its default.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the sampling temperature, in [0, 1].
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens.
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens as f64);
        self
    }

    /// Set nucleus sampling probability, in [0, 1].
    pub const fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// Fully defaulted, range-checked generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Prompt with the theme prefix already applied.
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub seed: Option<i64>,
}

impl GenerationParams {
    /// Prompt steering flags derived from the penalties.
    pub fn flags(&self) -> PromptInstructionFlags {
        PromptInstructionFlags::from_penalties(self.presence_penalty, self.frequency_penalty)
    }

    /// Outbound sampling configuration.
    pub const fn sampling(&self) -> SamplingConfig {
        SamplingConfig::new(self.temperature, self.max_tokens, self.top_p).with_seed(self.seed)
    }
}

/// Fully defaulted, range-checked summarization parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationParams {
    pub text: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl SummarizationParams {
    /// Outbound sampling configuration.
    pub const fn sampling(&self) -> SamplingConfig {
        SamplingConfig::new(self.temperature, self.max_tokens, self.top_p)
    }
}

/// Fully defaulted, range-checked improvement parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementParams {
    pub text: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl ImprovementParams {
    /// Outbound sampling configuration.
    pub const fn sampling(&self) -> SamplingConfig {
        SamplingConfig::new(self.temperature, self.max_tokens, self.top_p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_absent_fields() {
        let req: GenerationRequest = serde_json::from_value(serde_json::json!({
            "prompt": "A cat learns to fly",
            "presencePenalty": 1.0,
            "maxTokens": 100
        }))
        .unwrap();
        assert_eq!(req.prompt, "A cat learns to fly");
        assert_eq!(req.presence_penalty, Some(1.0));
        assert_eq!(req.max_tokens, Some(100.0));
        assert_eq!(req.temperature, None);
        assert_eq!(req.seed, None);
    }

    #[test]
    fn builders_set_fields() {
        let req = SummarizationRequest::new("text").temperature(0.1).max_tokens(42);
        assert_eq!(req.temperature, Some(0.1));
        assert_eq!(req.max_tokens, Some(42.0));
        assert_eq!(req.top_p, None);
    }

    #[test]
    fn generation_params_derive_sampling_without_penalties() {
        let params = GenerationParams {
            prompt: "p".into(),
            temperature: 0.3,
            max_tokens: 12,
            top_p: 0.8,
            presence_penalty: 1.0,
            frequency_penalty: -1.0,
            seed: Some(7),
        };
        let sampling = params.sampling();
        assert_eq!(sampling.seed, Some(7));
        assert_eq!(sampling.max_output_tokens, 12);
        let flags = params.flags();
        assert!(flags.presence_penalty_positive);
        assert!(flags.frequency_penalty_negative);
    }
}
