//! Response transformation traits
//!
//! Extracts the expected output field from a provider response.

use crate::error::AssistantError;
use crate::types::OutputField;

/// Transform provider-specific responses into the flow's output string
pub trait ResponseTransformer: Send + Sync {
    /// Provider identifier
    fn provider_id(&self) -> &str;

    /// Extract `field` from the provider response JSON.
    ///
    /// A payload without the field (or with a non-string value) is an error;
    /// partial text is never returned.
    fn transform_response(
        &self,
        raw: &serde_json::Value,
        field: OutputField,
    ) -> Result<String, AssistantError>;
}
