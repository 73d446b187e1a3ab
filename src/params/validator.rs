//! Parameter Validator
//!
//! Turns raw requests into fully defaulted parameter records. Kind checks
//! (finite numbers, integral token counts and seeds, non-blank text) run first;
//! closed-range checks are declared on the request types with `validator` and
//! reported for the first failing field in declaration order.

use validator::{Validate, ValidationErrors};

use crate::error::{AssistantError, Result};
use crate::prompts::theme::apply_theme;
use crate::types::{
    GenerationParams, GenerationRequest, ImprovementParams, ImprovementRequest,
    SummarizationParams, SummarizationRequest,
};

pub const TEMPERATURE_MIN: f64 = 0.0;
pub const TEMPERATURE_MAX: f64 = 1.0;
pub const TOP_P_MIN: f64 = 0.0;
pub const TOP_P_MAX: f64 = 1.0;
pub const PENALTY_MIN: f64 = -2.0;
pub const PENALTY_MAX: f64 = 2.0;
pub const MAX_TOKENS_MIN: f64 = 1.0;
/// `maxOutputTokens` is a 32-bit field on the wire.
pub const MAX_TOKENS_MAX: f64 = i32::MAX as f64;

/// (struct field, reported name, min, max) in declaration order.
const RANGED_FIELDS: &[(&str, &str, f64, f64)] = &[
    ("temperature", "temperature", TEMPERATURE_MIN, TEMPERATURE_MAX),
    ("max_tokens", "maxTokens", MAX_TOKENS_MIN, MAX_TOKENS_MAX),
    ("top_p", "topP", TOP_P_MIN, TOP_P_MAX),
    ("presence_penalty", "presencePenalty", PENALTY_MIN, PENALTY_MAX),
    ("frequency_penalty", "frequencyPenalty", PENALTY_MIN, PENALTY_MAX),
];

impl GenerationRequest {
    /// Validate and default this request.
    pub fn validate_params(&self) -> Result<GenerationParams> {
        ensure_text("prompt", &self.prompt)?;
        ensure_finite("temperature", self.temperature)?;
        ensure_integer("maxTokens", self.max_tokens)?;
        ensure_finite("topP", self.top_p)?;
        ensure_finite("presencePenalty", self.presence_penalty)?;
        ensure_finite("frequencyPenalty", self.frequency_penalty)?;
        let seed = seed_value(self.seed.as_ref())?;
        self.validate()
            .map_err(|errors| first_range_violation(&errors, |field| self.ranged_value(field)))?;

        Ok(GenerationParams {
            prompt: apply_theme(self.theme.as_deref(), &self.prompt),
            temperature: self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE),
            max_tokens: self
                .max_tokens
                .map_or(Self::DEFAULT_MAX_TOKENS, |v| v as u32),
            top_p: self.top_p.unwrap_or(Self::DEFAULT_TOP_P),
            presence_penalty: self
                .presence_penalty
                .unwrap_or(Self::DEFAULT_PRESENCE_PENALTY),
            frequency_penalty: self
                .frequency_penalty
                .unwrap_or(Self::DEFAULT_FREQUENCY_PENALTY),
            seed,
        })
    }

    /// Parse a JSON request body. Shape errors are reported as validation errors.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(shape_error)
    }

    fn ranged_value(&self, field: &str) -> Option<f64> {
        match field {
            "temperature" => self.temperature,
            "max_tokens" => self.max_tokens,
            "top_p" => self.top_p,
            "presence_penalty" => self.presence_penalty,
            "frequency_penalty" => self.frequency_penalty,
            _ => None,
        }
    }
}

impl SummarizationRequest {
    /// Validate and default this request.
    pub fn validate_params(&self) -> Result<SummarizationParams> {
        ensure_text("text", &self.text)?;
        ensure_finite("temperature", self.temperature)?;
        ensure_integer("maxTokens", self.max_tokens)?;
        ensure_finite("topP", self.top_p)?;
        self.validate()
            .map_err(|errors| first_range_violation(&errors, |field| self.ranged_value(field)))?;

        Ok(SummarizationParams {
            text: self.text.clone(),
            temperature: self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE),
            max_tokens: self
                .max_tokens
                .map_or(Self::DEFAULT_MAX_TOKENS, |v| v as u32),
            top_p: self.top_p.unwrap_or(Self::DEFAULT_TOP_P),
        })
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(shape_error)
    }

    fn ranged_value(&self, field: &str) -> Option<f64> {
        match field {
            "temperature" => self.temperature,
            "max_tokens" => self.max_tokens,
            "top_p" => self.top_p,
            _ => None,
        }
    }
}

impl ImprovementRequest {
    /// Validate and default this request.
    pub fn validate_params(&self) -> Result<ImprovementParams> {
        ensure_text("text", &self.text)?;
        ensure_finite("temperature", self.temperature)?;
        ensure_integer("maxTokens", self.max_tokens)?;
        ensure_finite("topP", self.top_p)?;
        self.validate()
            .map_err(|errors| first_range_violation(&errors, |field| self.ranged_value(field)))?;

        Ok(ImprovementParams {
            text: self.text.clone(),
            temperature: self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE),
            max_tokens: self
                .max_tokens
                .map_or(Self::DEFAULT_MAX_TOKENS, |v| v as u32),
            top_p: self.top_p.unwrap_or(Self::DEFAULT_TOP_P),
        })
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(shape_error)
    }

    fn ranged_value(&self, field: &str) -> Option<f64> {
        match field {
            "temperature" => self.temperature,
            "max_tokens" => self.max_tokens,
            "top_p" => self.top_p,
            _ => None,
        }
    }
}

fn ensure_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssistantError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn ensure_finite(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() => Err(AssistantError::validation(
            field,
            "must be a finite number",
        )),
        _ => Ok(()),
    }
}

fn ensure_integer(field: &str, value: Option<f64>) -> Result<()> {
    ensure_finite(field, value)?;
    match value {
        Some(v) if v.fract() != 0.0 => {
            Err(AssistantError::validation(field, "must be an integer"))
        }
        _ => Ok(()),
    }
}

/// Whole-valued floats are accepted only inside `[-2^63, 2^63)`.
const SEED_FLOAT_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn seed_value(seed: Option<&serde_json::Number>) -> Result<Option<i64>> {
    let Some(number) = seed else {
        return Ok(None);
    };
    if let Some(exact) = number.as_i64() {
        return Ok(Some(exact));
    }
    let out_of_range = || AssistantError::validation("seed", "must fit in a 64-bit signed integer");
    if number.is_u64() {
        return Err(out_of_range());
    }
    match number.as_f64() {
        Some(v) if !v.is_finite() => Err(AssistantError::validation(
            "seed",
            "must be a finite number",
        )),
        Some(v) if v.fract() != 0.0 => Err(AssistantError::validation("seed", "must be an integer")),
        Some(v) if !(-SEED_FLOAT_BOUND..SEED_FLOAT_BOUND).contains(&v) => Err(out_of_range()),
        Some(v) => Ok(Some(v as i64)),
        None => Err(AssistantError::validation("seed", "must be an integer")),
    }
}

fn shape_error(err: serde_json::Error) -> AssistantError {
    AssistantError::validation("request", format!("is malformed: {err}"))
}

/// Pick the first failing ranged field (declaration order) and describe it.
fn first_range_violation(
    errors: &ValidationErrors,
    value_of: impl Fn(&str) -> Option<f64>,
) -> AssistantError {
    let field_errors = errors.field_errors();
    for (field, name, min, max) in RANGED_FIELDS {
        if !field_errors.iter().any(|(key, _)| &**key == *field) {
            continue;
        }
        let constraint = match value_of(*field) {
            Some(v) if v < *min => format!("must be at least {min}"),
            Some(v) if v > *max => format!("must be at most {max}"),
            _ => format!("must be between {min} and {max}"),
        };
        return AssistantError::validation(*name, constraint);
    }
    AssistantError::validation("request", errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_field(err: AssistantError, field: &str) -> String {
        match err {
            AssistantError::Validation {
                field: actual,
                constraint,
            } => {
                assert_eq!(actual, field);
                constraint
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn generation_defaults_are_applied() {
        let params = GenerationRequest::new("hello").validate_params().unwrap();
        assert_eq!(params.prompt, "hello");
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 250);
        assert_eq!(params.top_p, 0.9);
        assert_eq!(params.presence_penalty, 0.0);
        assert_eq!(params.frequency_penalty, 0.0);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn summarization_and_improvement_defaults_differ() {
        let summary = SummarizationRequest::new("t").validate_params().unwrap();
        assert_eq!(
            (summary.temperature, summary.max_tokens, summary.top_p),
            (0.7, 150, 0.9)
        );
        let improve = ImprovementRequest::new("t").validate_params().unwrap();
        assert_eq!(
            (improve.temperature, improve.max_tokens, improve.top_p),
            (0.5, 250, 0.9)
        );
    }

    #[test]
    fn explicit_values_are_kept() {
        let params = GenerationRequest::new("p")
            .temperature(0.0)
            .max_tokens(1)
            .top_p(1.0)
            .presence_penalty(-2.0)
            .frequency_penalty(2.0)
            .seed(-5)
            .validate_params()
            .unwrap();
        assert_eq!(params.temperature, 0.0);
        assert_eq!(params.max_tokens, 1);
        assert_eq!(params.top_p, 1.0);
        assert_eq!(params.presence_penalty, -2.0);
        assert_eq!(params.frequency_penalty, 2.0);
        assert_eq!(params.seed, Some(-5));
    }

    #[test]
    fn temperature_above_range_is_rejected() {
        let err = GenerationRequest::new("p")
            .temperature(1.5)
            .validate_params()
            .unwrap_err();
        assert_eq!(expect_field(err, "temperature"), "must be at most 1");
    }

    #[test]
    fn zero_max_tokens_violates_minimum() {
        let err = SummarizationRequest::new("some text")
            .max_tokens(0)
            .validate_params()
            .unwrap_err();
        assert_eq!(expect_field(err, "maxTokens"), "must be at least 1");
    }

    #[test]
    fn penalties_outside_range_are_rejected() {
        let err = GenerationRequest::new("p")
            .frequency_penalty(-2.5)
            .validate_params()
            .unwrap_err();
        assert_eq!(expect_field(err, "frequencyPenalty"), "must be at least -2");
    }

    #[test]
    fn first_failing_field_in_declaration_order_is_reported() {
        let err = GenerationRequest::new("p")
            .top_p(3.0)
            .presence_penalty(9.0)
            .temperature(-1.0)
            .validate_params()
            .unwrap_err();
        expect_field(err, "temperature");
    }

    #[test]
    fn non_integer_seed_is_rejected() {
        let mut req = GenerationRequest::new("p");
        req.seed = serde_json::Number::from_f64(1.5);
        let err = req.validate_params().unwrap_err();
        assert_eq!(expect_field(err, "seed"), "must be an integer");
    }

    #[test]
    fn large_seed_is_kept_exact() {
        let seed = 9_007_199_254_740_993_i64;
        let params = GenerationRequest::new("p").seed(seed).validate_params().unwrap();
        assert_eq!(params.seed, Some(seed));

        let near_max = i64::MAX - 100;
        let params = GenerationRequest::new("p")
            .seed(near_max)
            .validate_params()
            .unwrap();
        assert_eq!(params.seed, Some(near_max));

        let req = GenerationRequest::from_json(serde_json::json!({
            "prompt": "p",
            "seed": 9_007_199_254_740_993_i64
        }))
        .unwrap();
        assert_eq!(req.validate_params().unwrap().seed, Some(seed));
    }

    #[test]
    fn seed_outside_i64_is_rejected() {
        let req = GenerationRequest::from_json(serde_json::json!({
            "prompt": "p",
            "seed": u64::MAX
        }))
        .unwrap();
        assert_eq!(
            expect_field(req.validate_params().unwrap_err(), "seed"),
            "must fit in a 64-bit signed integer"
        );

        let mut req = GenerationRequest::new("p");
        req.seed = serde_json::Number::from_f64(9_223_372_036_854_775_808.0);
        expect_field(req.validate_params().unwrap_err(), "seed");
    }

    #[test]
    fn whole_float_seed_is_accepted() {
        let mut req = GenerationRequest::new("p");
        req.seed = serde_json::Number::from_f64(12.0);
        assert_eq!(req.validate_params().unwrap().seed, Some(12));
    }

    #[test]
    fn non_integer_max_tokens_is_rejected() {
        let mut req = ImprovementRequest::new("p");
        req.max_tokens = Some(12.25);
        expect_field(req.validate_params().unwrap_err(), "maxTokens");
    }

    #[test]
    fn nan_is_rejected() {
        let err = GenerationRequest::new("p")
            .top_p(f64::NAN)
            .validate_params()
            .unwrap_err();
        assert_eq!(expect_field(err, "topP"), "must be a finite number");
    }

    #[test]
    fn blank_text_is_rejected() {
        expect_field(
            GenerationRequest::new("   \n").validate_params().unwrap_err(),
            "prompt",
        );
        expect_field(
            SummarizationRequest::new("").validate_params().unwrap_err(),
            "text",
        );
    }

    #[test]
    fn theme_prefix_is_applied_to_prompt() {
        let params = GenerationRequest::new("a lighthouse keeper")
            .theme("sci-fi")
            .validate_params()
            .unwrap();
        assert_eq!(
            params.prompt,
            "Generate a sci-fi story about: a lighthouse keeper"
        );
    }

    #[test]
    fn from_json_rejects_wrong_kinds() {
        let err = GenerationRequest::from_json(serde_json::json!({
            "prompt": "p",
            "temperature": "hot"
        }))
        .unwrap_err();
        expect_field(err, "request");

        let err = SummarizationRequest::from_json(serde_json::json!({"maxTokens": 3}))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn from_json_then_validate_reports_json_integer_kind() {
        let req = GenerationRequest::from_json(serde_json::json!({
            "prompt": "p",
            "seed": 2.5
        }))
        .unwrap();
        expect_field(req.validate_params().unwrap_err(), "seed");
    }
}
