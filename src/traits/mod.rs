//! Capability traits

pub mod text;

pub use text::TextModel;
