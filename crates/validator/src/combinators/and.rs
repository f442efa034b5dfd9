//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed.
//!
//! ```rust,ignore
//! use wings_validator::combinators::And;
//! use wings_validator::foundation::Validate;
//!
//! let validator = And::new(min_length(6), max_length(20));
//! assert!(validator.validate("secret").is_ok());
//! assert!(validator.validate("abc").is_err()); // fails min_length
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator; the right
/// validator is not run when the left one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, min_length};

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_left_fails_first() {
        let validator = And::new(min_length(5), max_length(1));
        let error = validator.validate("hi").unwrap_err();
        assert_eq!(error.code, "min_length");
    }

    #[test]
    fn test_and_right_fails() {
        let validator = and(min_length(1), max_length(3));
        let error = validator.validate("toolong").unwrap_err();
        assert_eq!(error.code, "max_length");
    }

    #[test]
    fn test_and_chain() {
        let validator = min_length(3).and(max_length(10)).and(min_length(5));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hey").is_err());
        assert_eq!(validator.left().left().min, 3);
    }
}
