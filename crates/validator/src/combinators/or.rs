//! OR combinator - logical disjunction of validators
//!
//! ```
//! use cluster_validator::combinators::Or;
//! use cluster_validator::foundation::Validate;
//! use cluster_validator::validators::{Hostname, IpAddress};
//!
//! let validator = Or::new(IpAddress, Hostname);
//! assert!(validator.validate("10.0.0.1").is_ok());
//! assert!(validator.validate("ntp.example.com").is_ok());
//! assert!(validator.validate("no spaces allowed").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// If the first validator passes, the second is not evaluated. If both fail,
/// the combined error nests both errors in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

impl<L, R> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with OR logic.
    pub fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        Or::new(self, other)
    }
}

/// Creates an `Or` combinator from two validators.
pub const fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}
