//! Request transformation traits
//!
//! Converts a model call into a provider-specific JSON body.

use crate::error::AssistantError;
use crate::types::ModelCall;

/// Transform a model call into provider-specific payload
pub trait RequestTransformer: Send + Sync {
    /// Provider identifier (e.g., "gemini")
    fn provider_id(&self) -> &str;

    /// Transform a `ModelCall` into a provider-specific JSON body
    fn transform_call(&self, call: &ModelCall) -> Result<serde_json::Value, AssistantError>;
}
