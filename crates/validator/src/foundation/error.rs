//! Error types for validation failures
//!
//! [`ValidationError`] is the structured error every validator returns. Its
//! `message` is user-facing text that the API layer surfaces as-is; the
//! `code` and [`ErrorKind`] are for programmatic handling.
//!
//! [`StatusError`] pairs an error with an HTTP status classification so a
//! caller can pick a response code without inspecting message text.

use std::borrow::Cow;
use std::fmt;

use http::StatusCode;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// The input does not match the required grammar.
    #[default]
    Format,
    /// A base64 / PEM payload could not be decoded or parsed.
    Decode,
    /// The validator's own machinery failed (e.g. a pattern did not compile).
    Internal,
}

impl ErrorKind {
    /// Maps the kind onto the status an API layer should answer with.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Format | Self::Decode => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Uses `Cow<'static, str>` so static codes and messages never allocate.
///
/// # Examples
///
/// ```
/// use cluster_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new("unexpected_flag", "found unexpected flag --x")
///     .with_field("installer_args")
///     .with_param("flag", "--x");
///
/// assert_eq!(error.kind, ErrorKind::Format);
/// assert_eq!(error.param("flag"), Some("--x"));
/// assert_eq!(error.to_string(), "[installer_args] found unexpected flag --x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "unexpected_flag", "dns_format_mismatch", "certificate_parse"
    pub code: Cow<'static, str>,

    /// Human-readable message, surfaced directly to end users.
    pub message: Cow<'static, str>,

    /// Failure classification.
    pub kind: ErrorKind,

    /// Optional field path when the error belongs to a settings payload.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Lower-level errors that caused this one.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new format error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: ErrorKind::Format,
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Creates a decode error (base64 / PEM / DER).
    pub fn decode(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_kind(ErrorKind::Decode)
    }

    /// Creates an internal error.
    pub fn internal(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, message).with_kind(ErrorKind::Internal)
    }

    /// Sets the failure classification.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds nested validation errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns `true` if this error or any nested error is internal.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.kind == ErrorKind::Internal || self.nested.iter().any(ValidationError::is_internal)
    }

    /// Status an API layer should answer with for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        if self.is_internal() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            self.kind.status()
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}] ")?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.nested
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// STATUS ERROR
// ============================================================================

/// A validation error together with the HTTP status the caller should use.
///
/// Keeps "the input is malformed" (400) apart from "the validator itself
/// failed" (500) without string-matching the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct StatusError {
    /// Status hint for the API layer.
    pub status: StatusCode,
    /// The underlying validation failure.
    #[source]
    pub error: ValidationError,
}

impl StatusError {
    /// Creates a status error with an explicit status.
    pub fn new(status: StatusCode, error: ValidationError) -> Self {
        Self { status, error }
    }

    /// A 400 for malformed input.
    pub fn bad_request(error: ValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// A 500 for an internal failure.
    pub fn internal(error: ValidationError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    /// The status as a plain integer.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }
}

impl From<ValidationError> for StatusError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.status(), error)
    }
}

impl From<StatusError> for ValidationError {
    fn from(err: StatusError) -> Self {
        err.error
    }
}

/// Status hint for a classified result: `0` on success, otherwise the
/// HTTP status code carried by the error.
///
/// # Examples
///
/// ```
/// use cluster_validator::foundation::status_hint;
/// use cluster_validator::validators::validate_domain_name_format;
///
/// assert_eq!(status_hint(&validate_domain_name_format("example.com")), 0);
/// assert_eq!(status_hint(&validate_domain_name_format("192.168.1.1")), 400);
/// ```
#[must_use]
pub fn status_hint<T>(result: &Result<T, StatusError>) -> u16 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Finds the error recorded for a field.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field.as_deref() == Some(field))
    }

    /// Returns `true` if any collected error is internal.
    #[must_use]
    pub fn has_internal(&self) -> bool {
        self.errors.iter().any(ValidationError::is_internal)
    }

    /// 500 if any error is internal, otherwise 400.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        if self.has_internal() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
