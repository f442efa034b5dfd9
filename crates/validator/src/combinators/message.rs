//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Form rules use this to carry a caller-supplied message override; when no
/// override is set the inner validator's default message passes through.
///
/// # Examples
///
/// ```rust,ignore
/// use wings_validator::combinators::WithMessage;
/// use wings_validator::foundation::Validate;
///
/// let validator = WithMessage::new(min_length(8), "Password must be at least 8 characters");
///
/// let result = validator.validate("short");
/// assert_eq!(result.unwrap_err().message, "Password must be at least 8 characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: Some(message.into()),
        }
    }

    /// Wraps a validator, optionally overriding its message.
    ///
    /// `None` keeps the inner validator's default message.
    pub fn maybe(inner: V, message: Option<String>) -> Self {
        Self { inner, message }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| match &self.message {
            Some(message) => ValidationError::new(original.code.clone(), Cow::Owned(message.clone()))
                .with_nested_error(original),
            None => original,
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
