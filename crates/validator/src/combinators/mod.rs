//! Validator combinators
//!
//! - [`And`]: both validators must pass, first failure wins
//! - [`WithMessage`]: replaces the failure message

pub mod and;
pub mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
