//! Transformers
//!
//! Map a [`crate::types::ModelCall`] to a provider JSON body and a provider JSON
//! response back to the expected output string. Executors wire them to HTTP.

pub mod request;
pub mod response;

pub use request::RequestTransformer;
pub use response::ResponseTransformer;
