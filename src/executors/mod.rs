//! Executors
//!
//! Drive a model call through request/response transformers over HTTP.

pub mod text;

pub use text::{HttpTextExecutor, TextExecutor};
