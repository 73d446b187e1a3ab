//! Server adapters: expose the assistant flows over HTTP
//!
//! - **Axum integration**: [`axum::router`] (requires `server-adapters` feature)
//! - **Error masking**: invocation and configuration causes are logged, not returned

#[cfg(feature = "server-adapters")]
pub mod axum;

/// Options for rendering error responses.
#[derive(Debug, Clone)]
pub struct ErrorResponseOptions {
    /// When `false`, the underlying error text is included as `detail`.
    /// Default: `true`
    pub mask_errors: bool,
}

impl Default for ErrorResponseOptions {
    fn default() -> Self {
        Self { mask_errors: true }
    }
}

impl ErrorResponseOptions {
    /// Include error details in responses.
    pub fn development() -> Self {
        Self { mask_errors: false }
    }

    pub fn production() -> Self {
        Self::default()
    }
}
