//! Transformers for Gemini
//!
//! Request: a single user turn carrying the composed prompt, with the sampling
//! configuration and a one-field JSON response schema.
//! Response: concatenated candidate text, parsed as JSON, field extracted.

use serde_json::json;

use crate::error::AssistantError;
use crate::transformers::{RequestTransformer, ResponseTransformer};
use crate::types::{ModelCall, OutputField};

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const PROVIDER_ID: &str = "gemini";

/// Request transformer for Gemini
#[derive(Debug, Clone, Default)]
pub struct GeminiRequestTransformer;

impl GeminiRequestTransformer {
    pub fn build_request(&self, call: &ModelCall) -> GenerateContentRequest {
        let sampling = call.sampling;
        GenerateContentRequest {
            contents: vec![Content::user_text(call.prompt.clone())],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(sampling.max_output_tokens),
                temperature: Some(sampling.temperature),
                top_p: Some(sampling.top_p),
                seed: sampling.seed,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema(call.output)),
            }),
        }
    }
}

impl RequestTransformer for GeminiRequestTransformer {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    fn transform_call(&self, call: &ModelCall) -> Result<serde_json::Value, AssistantError> {
        serde_json::to_value(self.build_request(call)).map_err(|e| {
            AssistantError::invocation_with_source("failed to serialize Gemini request", e)
        })
    }
}

/// Response transformer for Gemini
#[derive(Debug, Clone, Default)]
pub struct GeminiResponseTransformer;

impl ResponseTransformer for GeminiResponseTransformer {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    fn transform_response(
        &self,
        raw: &serde_json::Value,
        field: OutputField,
    ) -> Result<String, AssistantError> {
        let response: GenerateContentResponse = serde_json::from_value(raw.clone())
            .map_err(|e| {
                AssistantError::invocation_with_source("unexpected Gemini response shape", e)
            })?;

        if let Some(usage) = &response.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "gemini usage"
            );
        }

        let Some(candidate) = response.candidates.first() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!(" (blocked: {r})"))
                .unwrap_or_default();
            return Err(AssistantError::invocation(format!(
                "response contained no candidates{reason}"
            )));
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter(|p| !p.thought.unwrap_or(false))
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            let reason = candidate
                .finish_reason
                .as_deref()
                .map(|r| format!(" (finish reason: {r})"))
                .unwrap_or_default();
            return Err(AssistantError::invocation(format!(
                "candidate contained no text{reason}"
            )));
        }

        extract_output_field(&text, field)
    }
}

/// JSON schema advertised for a flow's single output field.
pub fn response_schema(field: OutputField) -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            field.key(): {
                "type": "STRING",
                "description": field.description(),
            }
        },
        "required": [field.key()],
    })
}

/// Parse the structured output text and pull out `field`.
pub fn extract_output_field(text: &str, field: OutputField) -> Result<String, AssistantError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| AssistantError::invocation_with_source("model output was not valid JSON", e))?;
    match value.get(field.key()) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AssistantError::invocation(format!(
            "model output field `{}` is not a string",
            field.key()
        ))),
        None => Err(AssistantError::invocation(format!(
            "model output is missing `{}`",
            field.key()
        ))),
    }
}

// Some models wrap JSON output in a markdown fence even with a JSON mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
