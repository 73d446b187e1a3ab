use crate::prompts::ComposedPrompt;
use crate::types::{OutputField, PromptInstructionFlags, SamplingConfig};

/// Everything the model invoker needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCall {
    /// Fully composed prompt text.
    pub prompt: String,
    /// Template variables the prompt was rendered from (generation only).
    pub variables: Option<PromptInstructionFlags>,
    pub sampling: SamplingConfig,
    /// The single string field expected in the structured output.
    pub output: OutputField,
}

impl ModelCall {
    pub fn new(composed: ComposedPrompt, sampling: SamplingConfig, output: OutputField) -> Self {
        Self {
            prompt: composed.text,
            variables: composed.variables,
            sampling,
            output,
        }
    }
}
