use tracing::Instrument;

use crate::error::{Flow, Result};
use crate::prompts::compose_summarization;
use crate::types::{ModelCall, OutputField, SummarizationOutput, SummarizationRequest};

use super::{TextAssistant, flow_span, log_rejected};

impl TextAssistant {
    /// Summarize a passage concisely.
    pub async fn summarize(&self, request: SummarizationRequest) -> Result<SummarizationOutput> {
        let span = flow_span(Flow::Summarize, &*self.model);
        async move {
            let params = request.validate_params().inspect_err(log_rejected)?;
            let call = ModelCall::new(
                compose_summarization(&params.text),
                params.sampling(),
                OutputField::Summary,
            );
            let summary = self.run(Flow::Summarize, call).await?;
            Ok(SummarizationOutput { summary })
        }
        .instrument(span)
        .await
    }
}
