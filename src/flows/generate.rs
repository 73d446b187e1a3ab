use tracing::Instrument;

use crate::error::{Flow, Result};
use crate::prompts::compose_generation;
use crate::types::{GenerationOutput, GenerationRequest, ModelCall, OutputField};

use super::{TextAssistant, flow_span, log_rejected};

impl TextAssistant {
    /// Generate text from a prompt.
    ///
    /// Penalties are not forwarded to the model; they select steering clauses in
    /// the composed prompt instead. The seed, when present, is forwarded as-is.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput> {
        let span = flow_span(Flow::Generate, &*self.model);
        async move {
            let params = request.validate_params().inspect_err(log_rejected)?;
            let flags = params.flags();
            tracing::debug!(steered = !flags.is_empty(), "composing generation prompt");
            let composed = compose_generation(&params.prompt, &flags);
            let call = ModelCall::new(composed, params.sampling(), OutputField::GeneratedText);
            let generated_text = self.run(Flow::Generate, call).await?;
            Ok(GenerationOutput { generated_text })
        }
        .instrument(span)
        .await
    }
}
