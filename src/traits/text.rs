//! Text model capability trait

use async_trait::async_trait;

use crate::error::AssistantError;
use crate::types::ModelCall;

/// A structured-output text model.
///
/// One `invoke` issues exactly one call and returns the value of
/// `call.output` from the model's structured response. Implementations keep no
/// per-call state and never retry.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Provider identifier (e.g. "gemini")
    fn provider_id(&self) -> &str;

    /// Model identifier used for calls
    fn model_id(&self) -> &str;

    async fn invoke(&self, call: ModelCall) -> Result<String, AssistantError>;
}
