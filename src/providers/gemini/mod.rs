//! Google Gemini provider
//!
//! Calls `models/{model}:generateContent` with a JSON response schema holding the
//! single output field of the flow, then decodes that field from the candidate text.

pub mod client;
pub mod config;
pub mod transformers;
pub mod types;

pub use client::GeminiClient;
pub use config::GeminiConfig;
