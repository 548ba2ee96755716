//! NTP source validators.
//!
//! An NTP source is an IP address or a [`Hostname`]. Additional sources are
//! configured as a comma-separated list and are all-or-nothing.

use crate::combinators::Or;
use crate::foundation::Validate;
use crate::patterns::all_strings;
use crate::validators::{Hostname, IpAddress};

/// IP address or hostname.
pub type NtpSource = Or<IpAddress, Hostname>;

/// Creates the [`NtpSource`] validator.
#[must_use]
pub const fn ntp_source() -> NtpSource {
    Or::new(IpAddress, Hostname)
}

/// Returns `true` if `source` is an IP address or a valid hostname.
pub fn validate_ntp_source(source: &str) -> bool {
    ntp_source().is_valid(source)
}

/// Returns `true` if every element of the comma-separated list is a valid
/// NTP source.
///
/// Elements are not trimmed, so `"a.com, b.com"` is rejected.
pub fn validate_additional_ntp_source(comma_separated_sources: &str) -> bool {
    all_strings(comma_separated_sources.split(','), validate_ntp_source)
}
