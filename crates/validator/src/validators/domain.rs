//! DNS domain name validators.
//!
//! Two grammars, tried in order:
//!
//! 1. [`BaseDomain`]: a single label such as `example`, 2 to 62 characters.
//! 2. [`DnsName`]: a dotted name such as `cluster.example.com`, at most 255
//!    characters and not shaped like `##.##.##.##`.
//!
//! [`DomainName`] composes the two and additionally understands the
//! `validateNoWildcardDNS.` marker: `validateNoWildcardDNS.example.com.` is
//! checked as `example.com`.
//!
//! The composed check reports a [`StatusError`] so the API layer can tell
//! malformed input (400) from an internal failure (500).

use http::StatusCode;

use crate::foundation::{ErrorKind, StatusError, Validate, ValidationError};
use crate::patterns::{
    BASE_DOMAIN, BASE_DOMAIN_REGEX, DNS_NAME, DNS_NAME_REGEX, DOTTED_DECIMAL, WILDCARD_DOMAIN,
    WILDCARD_DOMAIN_PREFIX,
};

const BASE_DOMAIN_MIN_LEN: usize = 1;
const BASE_DOMAIN_MAX_LEN: usize = 63;
const DNS_NAME_MAX_LEN: usize = 255;

// ============================================================================
// BASE DOMAIN
// ============================================================================

/// A single unqualified label, longer than 1 and shorter than 63 characters.
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::BaseDomain;
///
/// assert!(BaseDomain.validate("ab").is_ok());
/// assert!(BaseDomain.validate("a").is_err());
/// assert!(BaseDomain.validate("example.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BaseDomain;

impl Validate for BaseDomain {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.len();
        if BASE_DOMAIN.is_match(input)? && len > BASE_DOMAIN_MIN_LEN && len < BASE_DOMAIN_MAX_LEN {
            return Ok(());
        }

        Err(ValidationError::new(
            "invalid_base_domain",
            format!(
                "{input} is not a valid base domain. Must match regex [{BASE_DOMAIN_REGEX}] and be between 2 and 62 characters"
            ),
        )
        .with_param("length", len.to_string()))
    }
}

// ============================================================================
// DNS NAME
// ============================================================================

/// A fully dotted DNS name.
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::DnsName;
///
/// assert!(DnsName.validate("cluster.example.com").is_ok());
/// assert!(DnsName.validate("192.168.1.1").is_err());
/// assert!(DnsName.validate("example").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DnsName;

impl Validate for DnsName {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if DNS_NAME.is_match(input)?
            && !is_dotted_decimal_domain(input)?
            && input.len() <= DNS_NAME_MAX_LEN
        {
            return Ok(());
        }

        Err(dns_format_mismatch(input))
    }
}

/// RFC 1123 §2.1: a domain must not resemble `##.##.##.##`.
///
/// The search is unanchored, so `1.2.3.4.example.com` is also rejected.
pub fn is_dotted_decimal_domain(domain: &str) -> Result<bool, ValidationError> {
    DOTTED_DECIMAL.is_match(domain)
}

fn dns_format_mismatch(name: &str) -> ValidationError {
    ValidationError::new(
        "dns_format_mismatch",
        format!(
            "DNS format mismatch: {name} domain name is not valid. Must match regex [{DNS_NAME_REGEX}], be no more than 255 characters, and not be in dotted decimal format (##.##.##.##)"
        ),
    )
}

// ============================================================================
// DOMAIN NAME
// ============================================================================

/// Base domain or DNS name, with wildcard-marker unwrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DomainName;

impl DomainName {
    /// Runs the check and classifies the failure.
    pub fn check(&self, input: &str) -> Result<(), StatusError> {
        let domain = unwrap_wildcard(input);

        match BaseDomain.validate(domain) {
            Ok(()) => return Ok(()),
            Err(e) if e.kind == ErrorKind::Internal => {
                return Err(StatusError::internal(internal_failure(
                    "Single DNS base domain validation",
                    input,
                    e,
                )));
            }
            Err(_) => {}
        }

        match DnsName.validate(domain) {
            Ok(()) => Ok(()),
            Err(e) if e.kind == ErrorKind::Internal => Err(StatusError::internal(
                internal_failure("DNS name validation", input, e),
            )),
            Err(_) => Err(StatusError::new(
                StatusCode::BAD_REQUEST,
                dns_format_mismatch(input),
            )),
        }
    }
}

impl Validate for DomainName {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check(input).map_err(ValidationError::from)
    }
}

fn internal_failure(what: &str, name: &str, cause: ValidationError) -> ValidationError {
    ValidationError::internal(
        "domain_validation",
        format!("{what} for {name}: {}", cause.message),
    )
    .with_nested_error(cause)
}

/// Strips the `validateNoWildcardDNS.` marker and one trailing dot.
///
/// Input without the marker is returned unchanged.
///
/// ```
/// use cluster_validator::validators::unwrap_wildcard;
///
/// assert_eq!(unwrap_wildcard("validateNoWildcardDNS.example.com."), "example.com");
/// assert_eq!(unwrap_wildcard("validateNoWildcardDNS.example.com"), "example.com");
/// assert_eq!(unwrap_wildcard("example.com."), "example.com.");
/// ```
pub fn unwrap_wildcard(name: &str) -> &str {
    // A marker pattern that cannot be evaluated means the input is checked as-is.
    if !WILDCARD_DOMAIN.is_match(name).unwrap_or(false) {
        return name;
    }
    let trimmed = name.strip_prefix(WILDCARD_DOMAIN_PREFIX).unwrap_or(name);
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

/// Creates a new [`DomainName`] validator.
#[must_use]
pub const fn domain_name() -> DomainName {
    DomainName
}

/// Validates a base domain or DNS name.
///
/// On failure the [`StatusError`] carries 400 for malformed input and 500
/// for an internal failure; see [`status_hint`](crate::foundation::status_hint).
pub fn validate_domain_name_format(name: &str) -> Result<(), StatusError> {
    DomainName.check(name)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_domain_bounds() {
        assert!(BaseDomain.validate("a").is_err());
        assert!(BaseDomain.validate("ab").is_ok());
        assert!(BaseDomain.validate(&"a".repeat(62)).is_ok());
        assert!(BaseDomain.validate(&"a".repeat(63)).is_err());
    }

    #[test]
    fn base_domain_hyphens() {
        assert!(BaseDomain.validate("a-b").is_ok());
        assert!(BaseDomain.validate("a--b").is_ok());
        assert!(BaseDomain.validate("-ab").is_err());
        assert!(BaseDomain.validate("ab-").is_err());
    }

    #[test]
    fn base_domain_error_reports_length() {
        let err = BaseDomain.validate("a").unwrap_err();
        assert_eq!(err.code, "invalid_base_domain");
        assert_eq!(err.param("length"), Some("1"));
    }

    #[test]
    fn dns_name_shapes() {
        assert!(DnsName.validate("example.com").is_ok());
        assert!(DnsName.validate("a.b.c.example.com").is_ok());
        assert!(DnsName.validate("my-cluster.example.com").is_ok());
        assert!(DnsName.validate("example.c").is_err());
        assert!(DnsName.validate("example.com.").is_err());
        assert!(DnsName.validate(".example.com").is_err());
        assert!(DnsName.validate("Example.com").is_err());
        assert!(DnsName.validate("example").is_err());
    }

    #[test]
    fn dns_name_rejects_dotted_decimal() {
        assert!(DnsName.validate("192.168.1.1").is_err());
        assert!(DnsName.validate("1.2.3.4.example.com").is_err());
        assert!(DnsName.validate("1.2.3.example.com").is_ok());
    }

    #[test]
    fn dns_name_length_limit() {
        let label = "a".repeat(63);
        let name = format!("{label}.{label}.{label}.{label}");
        assert_eq!(name.len(), 255);
        assert!(DnsName.validate(&name).is_ok());

        let name = format!("{name}a");
        assert!(DnsName.validate(&name).is_err());
    }

    #[test]
    fn domain_name_tries_base_then_dns() {
        assert!(validate_domain_name_format("ab").is_ok());
        assert!(validate_domain_name_format("example.com").is_ok());
        assert!(validate_domain_name_format("a").is_err());
    }

    #[test]
    fn domain_name_bad_request() {
        let err = validate_domain_name_format("192.168.1.1").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.code, "dns_format_mismatch");
        assert_eq!(
            err.error.message,
            format!(
                "DNS format mismatch: 192.168.1.1 domain name is not valid. Must match regex [{DNS_NAME_REGEX}], be no more than 255 characters, and not be in dotted decimal format (##.##.##.##)"
            )
        );
    }

    #[test]
    fn wildcard_marker_checks_unwrapped_form() {
        assert!(validate_domain_name_format("validateNoWildcardDNS.example.com.").is_ok());
        assert!(validate_domain_name_format("validateNoWildcardDNS.example.com").is_ok());
        assert!(validate_domain_name_format("validateNoWildcardDNS.ab").is_ok());
        assert!(validate_domain_name_format("validateNoWildcardDNS.a").is_err());
        assert!(validate_domain_name_format("validateNoWildcardDNS.1.2.3.4.").is_err());
    }

    #[test]
    fn wildcard_error_quotes_original_input() {
        let err = validate_domain_name_format("validateNoWildcardDNS.Bad.").unwrap_err();
        assert!(
            err.error
                .message
                .starts_with("DNS format mismatch: validateNoWildcardDNS.Bad. domain name")
        );
    }

    #[test]
    fn bare_marker_is_not_unwrapped() {
        assert_eq!(unwrap_wildcard("validateNoWildcardDNS."), "validateNoWildcardDNS.");
        assert!(validate_domain_name_format("validateNoWildcardDNS.").is_err());
    }

    #[test]
    fn validate_impl_keeps_kind() {
        let err = DomainName.validate("-").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
    }
}
