//! Core error type shared by every flow.

use thiserror::Error;

/// Boxed underlying cause kept for logging.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the validator, the configuration layer and the model invoker.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Bad or out-of-range input. Raised before any network attempt.
    #[error("Invalid value for `{field}`: {constraint}")]
    Validation { field: String, constraint: String },

    /// Missing or unusable configuration (e.g. no API credential).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model call failed, timed out, or returned an unusable payload.
    #[error("Model invocation failed: {message}")]
    ModelInvocation {
        message: String,
        /// HTTP status when the endpoint answered with a non-2xx response
        status: Option<u16>,
        #[source]
        source: Option<BoxedCause>,
    },
}

impl AssistantError {
    /// Create a validation error for `field`.
    pub fn validation(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a model invocation error without an underlying cause.
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::ModelInvocation {
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create a model invocation error wrapping `source`.
    pub fn invocation_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ModelInvocation {
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a model invocation error for a non-2xx endpoint response.
    pub fn invocation_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.is_empty() {
            format!("endpoint returned status {status}")
        } else {
            format!("endpoint returned status {status}: {body}")
        };
        Self::ModelInvocation {
            message,
            status: Some(status),
            source: None,
        }
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub const fn is_model_invocation(&self) -> bool {
        matches!(self, Self::ModelInvocation { .. })
    }

    /// HTTP status reported by the endpoint, if any.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ModelInvocation { status, .. } => *status,
            _ => None,
        }
    }

    /// Offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "could not connect to the model endpoint".to_string()
        } else {
            format!("HTTP request failed: {err}")
        };
        Self::ModelInvocation {
            message,
            status: err.status().map(|s| s.as_u16()),
            source: Some(Box::new(err)),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn validation_error_names_field_and_constraint() {
        let err = AssistantError::validation("temperature", "must be at most 1");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("temperature"));
        assert_eq!(
            err.to_string(),
            "Invalid value for `temperature`: must be at most 1"
        );
    }

    #[test]
    fn invocation_status_keeps_status_and_body() {
        let err = AssistantError::invocation_status(503, "overloaded");
        assert!(err.is_model_invocation());
        assert_eq!(err.status_code(), Some(503));
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn invocation_with_source_exposes_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AssistantError::invocation_with_source("bad payload", cause);
        assert!(err.source().is_some());
        assert_eq!(err.status_code(), None);
    }
}
