use tracing::Instrument;

use crate::error::{Flow, Result};
use crate::prompts::compose_improvement;
use crate::types::{ImprovementOutput, ImprovementRequest, ModelCall, OutputField};

use super::{TextAssistant, flow_span, log_rejected};

impl TextAssistant {
    /// Rewrite a passage to be clearer, more concise and more engaging.
    pub async fn improve(&self, request: ImprovementRequest) -> Result<ImprovementOutput> {
        let span = flow_span(Flow::Improve, &*self.model);
        async move {
            let params = request.validate_params().inspect_err(log_rejected)?;
            let call = ModelCall::new(
                compose_improvement(&params.text),
                params.sampling(),
                OutputField::ImprovedText,
            );
            let improved_text = self.run(Flow::Improve, call).await?;
            Ok(ImprovementOutput { improved_text })
        }
        .instrument(span)
        .await
    }
}
