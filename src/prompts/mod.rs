//! Prompt Composer
//!
//! Static instruction templates filled with request text. Conditional clauses are
//! rendered by explicit string building so the exact output stays auditable.

pub mod composer;
pub mod theme;

pub use composer::{
    ComposedPrompt, compose_generation, compose_improvement, compose_summarization,
};
pub use theme::{StoryTheme, apply_theme};
