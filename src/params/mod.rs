//! Parameter Management Module
//!
//! Range and kind checks for incoming requests, plus helpers for turning
//! free-form UI input into typed parameters.

pub mod seed;
pub mod validator;

pub use seed::parse_seed;
pub use self::validator::*;
