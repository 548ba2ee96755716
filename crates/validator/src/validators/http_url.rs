//! HTTP URL and HTTP proxy URL validators.
//!
//! [`HttpUrl`] accepts `http` and `https`. [`HttpProxyUrl`] accepts only
//! `http`: proxies are reached over plain HTTP, so `https` gets its own
//! explanation instead of the generic scheme error.

use url::Url;

use crate::foundation::{Validate, ValidationError};

/// Inputs of this many bytes or fewer are never well-formed URLs.
const MIN_URL_BYTES: usize = 3;
/// Inputs of this many characters or more are never well-formed URLs.
const MAX_URL_CHARS: usize = 2083;

/// Schemes a well-formed URL may spell out before `://`.
const WELL_FORMED_SCHEMES: [&str; 7] = ["ftp", "tcp", "udp", "ws", "wss", "http", "https"];

// ============================================================================
// HTTP URL
// ============================================================================

/// A URL whose scheme is `http` or `https`.
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::HttpUrl;
///
/// assert!(HttpUrl.validate("https://x.com").is_ok());
/// assert!(HttpUrl.validate("ftp://x.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HttpUrl;

impl Validate for HttpUrl {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let url = Url::parse(input).map_err(|e| {
            ValidationError::new(
                "invalid_url",
                format!("URL '{input}' format is not valid: {e}"),
            )
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ValidationError::new(
                "unsupported_scheme",
                format!("The URL scheme must be http(s) and specified in the URL: '{input}'"),
            )
            .with_param("scheme", scheme.to_owned())),
        }
    }
}

/// Validates an `http` / `https` URL.
pub fn validate_http_format(url: &str) -> Result<(), ValidationError> {
    HttpUrl.validate(url)
}

// ============================================================================
// HTTP PROXY URL
// ============================================================================

/// A well-formed URL whose scheme is exactly `http`.
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::HttpProxyUrl;
///
/// assert!(HttpProxyUrl.validate("http://proxy:3128").is_ok());
/// let err = HttpProxyUrl.validate("https://proxy:3128").unwrap_err();
/// assert_eq!(err.code, "https_proxy_unsupported");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HttpProxyUrl;

impl Validate for HttpProxyUrl {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !is_well_formed_url(input) {
            return Err(ValidationError::new(
                "invalid_proxy_url",
                format!("Proxy URL format is not valid: '{input}'"),
            ));
        }

        // A well-formed URL may still lack a scheme (`proxy.example.com`).
        let scheme = Url::parse(input).ok().map(|u| u.scheme().to_owned());
        match scheme.as_deref() {
            Some("http") => Ok(()),
            Some("https") => Err(ValidationError::new(
                "https_proxy_unsupported",
                format!(
                    "The URL scheme must be http; https is currently not supported: '{input}'"
                ),
            )),
            _ => Err(ValidationError::new(
                "unsupported_scheme",
                format!("The URL scheme must be http and specified in the URL: '{input}'"),
            )),
        }
    }
}

/// Structural URL check: bounded length, no whitespace or control
/// characters, a known scheme if one is spelled out, a host, no leading dots.
///
/// Input without `://` is checked as if `http://` were prepended so that
/// `host:port` and bare hosts count as well-formed; the scheme decision is
/// left to the caller.
fn is_well_formed_url(input: &str) -> bool {
    if input.len() <= MIN_URL_BYTES
        || input.chars().count() >= MAX_URL_CHARS
        || input.starts_with('.')
        || input.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let parsed = match input.split_once("://") {
        Some((scheme, _)) if !WELL_FORMED_SCHEMES.contains(&scheme) => return false,
        Some(_) => Url::parse(input),
        None => Url::parse(&format!("http://{input}")),
    };

    parsed
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty() && !host.starts_with('.')))
        .unwrap_or(false)
}

/// Validates an HTTP proxy URL.
pub fn validate_http_proxy_format(proxy_url: &str) -> Result<(), ValidationError> {
    HttpProxyUrl.validate(proxy_url)
}

// ============================================================================
// TESTS
// ============================================================================
