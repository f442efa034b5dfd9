//! Prelude module for convenient imports.
//!
//! `use wings_validator::prelude::*;` brings in the core traits, the error
//! type, every built-in validator and the combinators.

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

pub use crate::validators::{
    Email, LengthMode, MatchesRegex, Max, MaxLength, Min, MinLength, email, matches_regex, max,
    max_length, min, min_length,
};

pub use crate::combinators::{And, WithMessage, and, with_message};
