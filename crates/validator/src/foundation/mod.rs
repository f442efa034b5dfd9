//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`
//!
//! Validators are generic over their input type, so a length check only
//! accepts `str` and a numeric bound only accepts its number type:
//!
//! ```rust,ignore
//! use wings_validator::foundation::{Validate, ValidationError};
//!
//! struct NonBlank;
//!
//! impl Validate for NonBlank {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.trim().is_empty() {
//!             Err(ValidationError::new("non_blank", "Must not be blank"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
