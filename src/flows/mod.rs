//! Assistant flows
//!
//! `TextAssistant` is the facade over the three operations. It owns a shared
//! [`TextModel`] and nothing else, so one instance can serve any number of
//! concurrent callers behind an `Arc`.

mod builder;
mod generate;
mod improve;
mod summarize;

use std::sync::Arc;

use crate::error::{AssistantError, Flow, Result};
use crate::traits::TextModel;
use crate::types::ModelCall;

pub use builder::TextAssistantBuilder;

/// Entry point for text generation, summarization and improvement.
#[derive(Clone)]
pub struct TextAssistant {
    model: Arc<dyn TextModel>,
}

impl std::fmt::Debug for TextAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAssistant")
            .field("provider", &self.model.provider_id())
            .field("model", &self.model.model_id())
            .finish()
    }
}

impl TextAssistant {
    /// Wrap an existing model invoker.
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    pub fn builder() -> TextAssistantBuilder {
        TextAssistantBuilder::default()
    }

    /// Build a Gemini-backed assistant from the process environment.
    ///
    /// A missing credential is logged and tolerated; calls then fail with a
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        Self::builder().from_env()?.build()
    }

    pub fn model(&self) -> &Arc<dyn TextModel> {
        &self.model
    }

    async fn run(&self, flow: Flow, call: ModelCall) -> Result<String> {
        tracing::debug!(
            prompt_chars = call.prompt.chars().count(),
            seeded = call.sampling.seed.is_some(),
            "invoking model"
        );
        match self.model.invoke(call).await {
            Ok(text) => {
                tracing::info!(output_chars = text.chars().count(), "{flow} completed");
                Ok(text)
            }
            Err(err) => {
                tracing::error!(error = %err, "{flow} failed");
                Err(err)
            }
        }
    }
}

fn log_rejected(err: &AssistantError) {
    tracing::debug!(error = %err, "request rejected");
}

fn flow_span(flow: Flow, model: &dyn TextModel) -> tracing::Span {
    tracing::info_span!(
        "flow",
        flow = flow.as_str(),
        provider = model.provider_id(),
        model = model.model_id()
    )
}
