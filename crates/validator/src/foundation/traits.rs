//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::combinators::Or;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so a validator only accepts what it knows how
/// to check. All validators return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```
/// use cluster_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a c").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean shorthand for `validate(input).is_ok()`.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass for the combined validator to succeed.
    /// Short-circuits on the first success.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluster_validator::prelude::*;
    ///
    /// let ip_or_host = IpAddress.or(Hostname);
    /// assert!(ip_or_host.validate("203.0.113.5").is_ok());
    /// assert!(ip_or_host.validate("time.example.com").is_ok());
    /// assert!(ip_or_host.validate("not a host!").is_err());
    /// ```
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}
