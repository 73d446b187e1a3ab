//! Error Handling Module
//!
//! This module provides the error taxonomy for the assistant flows:
//! - Core error type (`AssistantError`)
//! - User-facing error summaries for UI rendering
//!
//! # Example
//!
//! ```rust
//! use textsmith::error::{AssistantError, ErrorKind, Flow, summarize_error};
//!
//! let error = AssistantError::validation("temperature", "must be at most 1");
//! let summary = summarize_error(&error, Flow::Generate);
//! assert_eq!(summary.kind, ErrorKind::Validation);
//! ```

pub mod helpers;
pub mod types;

pub use helpers::*;
pub use types::*;
