//! Type definitions for the assistant flows
//!
//! Requests arrive in their raw form (every tunable optional), are validated into
//! fully defaulted parameter records, and leave as a single-field output record.

pub mod call;
pub mod flags;
pub mod output;
pub mod request;
pub mod sampling;

pub use call::ModelCall;
pub use flags::PromptInstructionFlags;
pub use output::{GenerationOutput, ImprovementOutput, OutputField, SummarizationOutput};
pub use request::{
    GenerationParams, GenerationRequest, ImprovementParams, ImprovementRequest,
    SummarizationParams, SummarizationRequest,
};
pub use sampling::SamplingConfig;
