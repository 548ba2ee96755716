//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`StatusError`]
//!
//! Validators are stateless values. Each one checks a single grammar and
//! reports failure through a structured [`ValidationError`] whose
//! [`ErrorKind`] tells a caller whether the input was malformed or the
//! validator itself failed.
//!
//! ```
//! use cluster_validator::foundation::{ErrorKind, Validate};
//! use cluster_validator::validators::Hostname;
//!
//! let err = Hostname.validate("-bad.example").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Format);
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorKind, StatusError, ValidationError, ValidationErrors, status_hint};
pub use traits::{Validate, ValidateExt};
