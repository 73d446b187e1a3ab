//! # textsmith - a small text assistant over Gemini
//!
//! Three stateless flows: `generate` (free-form or themed story text steered by
//! sampling parameters), `summarize` and `improve`. Each flow validates its
//! request, composes a deterministic prompt and asks the model for a single
//! structured string field.
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use textsmith::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assistant = TextAssistant::from_env()?;
//!
//!     let story = assistant
//!         .generate(
//!             GenerationRequest::new("a lighthouse keeper who collects storms")
//!                 .theme("folk tale")
//!                 .presence_penalty(0.5),
//!         )
//!         .await?;
//!     println!("{}", story.generated_text);
//!
//!     let summary = assistant
//!         .summarize(SummarizationRequest::new(story.generated_text))
//!         .await?;
//!     println!("{}", summary.summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The credential is read from `GOOGLE_GENAI_API_KEY` (falling back to
//! `GEMINI_API_KEY`, then `GOOGLE_API_KEY`). Without one the assistant still
//! builds, and every call fails with [`AssistantError::Configuration`] before any
//! network attempt.

pub mod config;
pub mod error;
pub mod executors;
pub mod flows;
pub mod params;
pub mod prompts;
pub mod providers;
pub mod server_adapters;
pub mod telemetry;
pub mod traits;
pub mod transformers;
pub mod types;

pub use config::AssistantConfig;
pub use error::{AssistantError, Result};
pub use flows::{TextAssistant, TextAssistantBuilder};
pub use traits::TextModel;

/// Common imports
pub mod prelude {
    pub use crate::config::AssistantConfig;
    pub use crate::error::{AssistantError, ErrorSummary, Flow, summarize_error};
    pub use crate::flows::{TextAssistant, TextAssistantBuilder};
    pub use crate::params::parse_seed;
    pub use crate::prompts::StoryTheme;
    pub use crate::traits::TextModel;
    pub use crate::types::{
        GenerationOutput, GenerationRequest, ImprovementOutput, ImprovementRequest,
        ModelCall, SummarizationOutput, SummarizationRequest,
    };
}
