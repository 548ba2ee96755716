//! no_proxy list validator.
//!
//! A no_proxy value is `*` (bypass the proxy for everything) or a
//! comma-separated list of IP addresses, CIDR blocks and domain names. A
//! domain may be prefixed with `.` to cover all of its subdomains.

use std::collections::HashSet;

use crate::foundation::{Validate, ValidationError};
use crate::patterns::NO_PROXY_DNS_NAME;
use crate::validators::{Cidr, IpAddress};

/// Value that disables the proxy for every destination.
pub const NO_PROXY_WILDCARD: &str = "*";

const NO_PROXY_DNS_NAME_MAX_LEN: usize = 255;

const NO_PROXY_GUIDANCE: &str = "NO Proxy is a comma-separated list of destination domain names, domains, IP addresses or other network CIDRs. \
A domain can be prefaced with '.' to include all subdomains of that domain. \
Use '*' to bypass proxy for all destinations with OpenShift 4.8 or later.";

// ============================================================================
// ENTRY
// ============================================================================

/// Domain name as accepted in a no_proxy entry.
///
/// Looser than [`DnsName`](crate::validators::DnsName): mixed case,
/// underscores, single-label names and a trailing `.` are fine. IP addresses
/// are not DNS names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoProxyDnsName;

impl Validate for NoProxyDnsName {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let undotted_len = input.chars().filter(|&c| c != '.').count();
        if !input.is_empty()
            && undotted_len <= NO_PROXY_DNS_NAME_MAX_LEN
            && !IpAddress.is_valid(input)
            && NO_PROXY_DNS_NAME.is_match(input)?
        {
            return Ok(());
        }
        Err(ValidationError::new(
            "invalid_dns_name",
            format!("{input} is not a valid DNS name"),
        ))
    }
}

/// A single no_proxy entry: IP, CIDR or domain name, optionally `.`-prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoProxyEntry;

impl Validate for NoProxyEntry {
    type Input = str;

    fn validate(&self, entry: &str) -> Result<(), ValidationError> {
        let target = entry.strip_prefix('.').unwrap_or(entry);

        if IpAddress.is_valid(target) || Cidr.is_valid(target) {
            return Ok(());
        }

        match NoProxyDnsName.validate(target) {
            Ok(()) => Ok(()),
            Err(e) if e.is_internal() => Err(e),
            Err(_) => Err(ValidationError::new(
                "invalid_no_proxy_entry",
                format!("{entry} is not a valid no_proxy entry"),
            )
            .with_param("entry", entry.to_owned())),
        }
    }
}

// ============================================================================
// LIST
// ============================================================================

/// The whole no_proxy value.
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::NoProxyList;
///
/// assert!(NoProxyList.validate("*").is_ok());
/// assert!(NoProxyList.validate(".example.com,10.0.0.0/8").is_ok());
/// assert!(NoProxyList.validate("a.com,a.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoProxyList;

impl Validate for NoProxyList {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input == NO_PROXY_WILDCARD {
            return Ok(());
        }

        let mut seen = HashSet::new();
        for entry in input.split(',') {
            if !seen.insert(entry) {
                return Err(ValidationError::new(
                    "duplicate_no_proxy_entry",
                    format!("duplicate no_proxy entry defined: {entry}"),
                )
                .with_param("entry", entry.to_owned()));
            }

            NoProxyEntry.validate(entry).map_err(|e| {
                ValidationError::new(
                    "invalid_no_proxy",
                    format!("{NO_PROXY_GUIDANCE}: {}", e.message),
                )
                .with_kind(e.kind)
                .with_nested_error(e)
            })?;
        }
        Ok(())
    }
}

/// Validates a no_proxy value, stopping at the first bad or duplicate entry.
pub fn validate_no_proxy_format(no_proxy: &str) -> Result<(), ValidationError> {
    NoProxyList.validate(no_proxy)
}

// ============================================================================
// TESTS
// ============================================================================
