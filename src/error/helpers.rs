//! User-facing error helpers.
//!
//! Flows surface the full `AssistantError` to the caller for logging, while UIs
//! render a short title and a generic message. Validation problems are the one
//! case where the specific message is shown, since the user can correct them.

use super::types::AssistantError;

/// Error kind for presentation (coarse-grained)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Client,
    Server,
    Network,
    Parsing,
}

/// The three assistant operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Generate,
    Summarize,
    Improve,
}

impl Flow {
    /// Stable identifier used in logs and routes.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Summarize => "summarize",
            Self::Improve => "improve",
        }
    }

    /// Title shown when the flow fails.
    pub const fn failure_title(&self) -> &'static str {
        match self {
            Self::Generate => "Generation Failed",
            Self::Summarize => "Summarization Failed",
            Self::Improve => "Improvement Failed",
        }
    }

    /// Generic message shown when the flow fails.
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Generate => "An error occurred while generating text. Please try again.",
            Self::Summarize => "An error occurred while summarizing text. Please try again.",
            Self::Improve => "An error occurred while improving text. Please try again.",
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error summary for CLI/UI consumption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSummary {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub title: String,
    /// Message safe to show to an end user
    pub message: String,
    /// Offending field for validation errors
    pub field: Option<String>,
}

/// Summarize an `AssistantError` for display.
pub fn summarize_error(err: &AssistantError, flow: Flow) -> ErrorSummary {
    match err {
        AssistantError::Validation { field, constraint } => ErrorSummary {
            kind: ErrorKind::Validation,
            status: None,
            title: validation_title(field).to_string(),
            message: format!("`{field}` {constraint}."),
            field: Some(field.clone()),
        },
        _ => ErrorSummary {
            kind: map_error_kind(err),
            status: err.status_code(),
            title: flow.failure_title().to_string(),
            message: flow.failure_message().to_string(),
            field: None,
        },
    }
}

/// Map `AssistantError` to presentation `ErrorKind`.
pub fn map_error_kind(err: &AssistantError) -> ErrorKind {
    match err {
        AssistantError::Validation { .. } => ErrorKind::Validation,
        AssistantError::Configuration(_) => ErrorKind::Configuration,
        AssistantError::ModelInvocation { status, source, .. } => match status {
            Some(code) if *code >= 500 => ErrorKind::Server,
            Some(_) => ErrorKind::Client,
            None => match source {
                Some(cause) if cause.is::<serde_json::Error>() => ErrorKind::Parsing,
                Some(cause) if cause.is::<reqwest::Error>() => ErrorKind::Network,
                _ => ErrorKind::Parsing,
            },
        },
    }
}

fn validation_title(field: &str) -> &'static str {
    match field {
        "prompt" => "Prompt Required",
        "text" => "Text Required",
        "seed" => "Invalid Seed",
        _ => "Invalid Parameter",
    }
}
