//! Hostname validator.
//!
//! A hostname starts and ends with a lowercase alphanumeric character and
//! contains only lowercase alphanumerics, `-` and `.` in between
//! ([`HOSTNAME_REGEX`](crate::patterns::HOSTNAME_REGEX)).

use crate::foundation::{Validate, ValidationError};
use crate::patterns::HOSTNAME;

// ============================================================================
// HOSTNAME VALIDATOR
// ============================================================================

/// Validates hostnames.
///
/// # Examples
///
/// ```
/// use cluster_validator::validators::Hostname;
/// use cluster_validator::foundation::Validate;
///
/// let v = Hostname;
/// assert!(v.validate("my-host.example").is_ok());
/// assert!(v.validate("-bad.example").is_err());
/// assert!(v.validate("Upper.example").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hostname;

impl Validate for Hostname {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let matched = HOSTNAME
            .is_match(input)
            .map_err(|e| wrap_internal(input, e))?;

        if matched {
            Ok(())
        } else {
            Err(ValidationError::new(
                "hostname_format_mismatch",
                format!(
                    "Hostname format mismatch: {input} name is not valid.\n\
                     Hostname must have a maximum length of 64 characters,\n\
                     start and end with a lowercase alphanumerical character,\n\
                     and can only contain lowercase alphanumerical characters, dashes, and periods."
                ),
            ))
        }
    }
}

fn wrap_internal(input: &str, cause: ValidationError) -> ValidationError {
    ValidationError::internal(
        "hostname_validation",
        format!("Hostname validation for {input}: {}", cause.message),
    )
    .with_nested_error(cause)
}

/// Creates a new [`Hostname`] validator.
#[must_use]
pub const fn hostname() -> Hostname {
    Hostname
}

/// Validates a hostname.
pub fn validate_hostname(name: &str) -> Result<(), ValidationError> {
    Hostname.validate(name)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Valid hostnames ---

    #[test]
    fn valid_simple() {
        assert!(validate_hostname("my-host.example").is_ok());
    }

    #[test]
    fn valid_two_chars() {
        assert!(validate_hostname("ab").is_ok());
    }

    #[test]
    fn valid_numeric() {
        assert!(validate_hostname("123.456").is_ok());
    }

    #[test]
    fn valid_interior_dots_and_dashes() {
        // The grammar does not police label structure.
        assert!(validate_hostname("a..--..b").is_ok());
    }

    #[test]
    fn valid_max_length() {
        let name = "a".repeat(63);
        assert!(validate_hostname(&name).is_ok());
    }

    // --- Invalid hostnames ---

    #[test]
    fn invalid_empty() {
        assert!(validate_hostname("").is_err());
    }

    #[test]
    fn invalid_single_char() {
        assert!(validate_hostname("a").is_err());
    }

    #[test]
    fn invalid_leading_hyphen() {
        assert!(validate_hostname("-bad.example").is_err());
    }

    #[test]
    fn invalid_trailing_dot() {
        assert!(validate_hostname("host.example.").is_err());
    }

    #[test]
    fn invalid_uppercase() {
        assert!(validate_hostname("Host.example").is_err());
    }

    #[test]
    fn invalid_underscore() {
        assert!(validate_hostname("my_host").is_err());
    }

    #[test]
    fn invalid_too_long() {
        assert!(validate_hostname(&"a".repeat(64)).is_err());
        assert!(validate_hostname(&"a".repeat(65)).is_err());
    }

    #[test]
    fn error_message_names_constraints() {
        let err = validate_hostname("Bad Host").unwrap_err();
        assert_eq!(err.code, "hostname_format_mismatch");
        assert!(err.message.starts_with("Hostname format mismatch: Bad Host name is not valid.\n"));
        assert!(err.message.contains("maximum length of 64 characters"));
        assert!(err.message.contains("start and end with a lowercase alphanumerical character"));
        assert!(err.message.ends_with("dashes, and periods."));
        assert_eq!(err.message.lines().count(), 4);
    }
}
