//! # wings-validator
//!
//! Composable, type-safe validators for single form values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wings_validator::prelude::*;
//!
//! // Compose validators with .and() and override messages with .with_message()
//! let password = min_length(6).and(max_length(64));
//! assert!(password.validate("secret").is_ok());
//!
//! let strict = min_length(8).with_message("Password is too short");
//! assert_eq!(strict.validate("abc").unwrap_err().message, "Password is too short");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **String**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`Email`](validators::Email), [`MatchesRegex`](validators::MatchesRegex)
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max)

// ValidationError is returned unboxed from every validator.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
