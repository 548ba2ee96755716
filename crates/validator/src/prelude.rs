//! Prelude module for convenient imports.
//!
//! `use cluster_validator::prelude::*;` brings in the traits, error types,
//! every validator and the settings payload.

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, StatusError, Validate, ValidateExt, ValidationError, ValidationErrors, status_hint,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS, HELPERS, SETTINGS
// ============================================================================

pub use crate::combinators::{Or, or};
pub use crate::patterns::all_strings;
pub use crate::settings::InstallSettings;
