//! Installer argument sanitizer.
//!
//! Tokens starting with `-` are flags and must appear in
//! [`ALLOWED_INSTALLER_FLAGS`]; every other token is a value and may only use
//! the characters of
//! [`INSTALLER_ARGS_VALUES_REGEX`](crate::patterns::INSTALLER_ARGS_VALUES_REGEX).

use crate::foundation::{Validate, ValidationError};
use crate::patterns::INSTALLER_ARGS_VALUES;

/// Flags the installer may be invoked with.
pub const ALLOWED_INSTALLER_FLAGS: [&str; 9] = [
    "--append-karg",
    "--delete-karg",
    "-n",
    "--copy-network",
    "--network-dir",
    "--save-partlabel",
    "--save-partindex",
    "--image-url",
    "--image-file",
];

/// Validates a single installer token (flag or value).
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::InstallerArg;
///
/// assert!(InstallerArg.validate("--append-karg").is_ok());
/// assert!(InstallerArg.validate("rd.neednet=1").is_ok());
/// assert!(InstallerArg.validate("--bad-flag").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InstallerArg;

impl Validate for InstallerArg {
    type Input = str;

    fn validate(&self, arg: &str) -> Result<(), ValidationError> {
        if arg.starts_with('-') {
            if ALLOWED_INSTALLER_FLAGS.contains(&arg) {
                return Ok(());
            }
            return Err(ValidationError::new(
                "unexpected_flag",
                format!(
                    "found unexpected flag {arg} for installer - allowed flags are [{}]",
                    ALLOWED_INSTALLER_FLAGS.join(" ")
                ),
            )
            .with_param("flag", arg.to_owned()));
        }

        if INSTALLER_ARGS_VALUES.is_match(arg)? {
            Ok(())
        } else {
            Err(ValidationError::new(
                "unexpected_value",
                format!("found unexpected chars in value {arg} for installer"),
            )
            .with_param("value", arg.to_owned()))
        }
    }
}

/// Validates a whole argument sequence, stopping at the first bad token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InstallerArgs;

impl Validate for InstallerArgs {
    type Input = [String];

    fn validate(&self, args: &[String]) -> Result<(), ValidationError> {
        validate_installer_args(args)
    }
}

/// Validates installer arguments.
///
/// ```
/// use cluster_validator::validators::validate_installer_args;
///
/// assert!(validate_installer_args(&["--image-url", "http://x/y.iso"]).is_ok());
/// assert!(validate_installer_args(&["value with spaces"]).is_err());
/// ```
pub fn validate_installer_args<S: AsRef<str>>(args: &[S]) -> Result<(), ValidationError> {
    args.iter()
        .try_for_each(|arg| InstallerArg.validate(arg.as_ref()))
}
