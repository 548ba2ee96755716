//! Grammar patterns shared by the validators.
//!
//! Every pattern source is a public constant because the grammar is part of
//! the user-facing contract: the domain check quotes [`DNS_NAME_REGEX`] in
//! its error message.
//!
//! Character classes are spelled out in ASCII (`[0-9]`, `[0-9A-Za-z_]`)
//! rather than `\d` / `\w`, which are Unicode-aware in `regex`.

use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::ValidationError;

// ============================================================================
// GRAMMAR SOURCES
// ============================================================================

/// A single unqualified label: lowercase alphanumerics, hyphens only between them.
pub const BASE_DOMAIN_REGEX: &str = r"^[a-z0-9]([\-]*[a-z0-9]+)+$";

/// Dot-separated lowercase labels; the final label has at least two characters.
pub const DNS_NAME_REGEX: &str = r"^([a-z0-9]([\-]*[a-z0-9]+)*\.)+[a-z0-9]+([\-]*[a-z0-9]+)+$";

/// Domains wrapped in the `validateNoWildcardDNS.` marker.
pub const WILDCARD_DOMAIN_REGEX: &str = r"^(validateNoWildcardDNS\.).+\.?$";

/// Literal prefix of the wildcard marker.
pub const WILDCARD_DOMAIN_PREFIX: &str = "validateNoWildcardDNS.";

/// Hostnames: lowercase alphanumeric ends, interior `[a-z0-9-.]`.
pub const HOSTNAME_REGEX: &str = r"^[a-z0-9][a-z0-9\-.]{0,61}[a-z0-9]$";

/// Installer argument values. `+-=` is a range (`+` through `=`).
pub const INSTALLER_ARGS_VALUES_REGEX: &str = r#"^[A-Za-z0-9@!#$%*()_+-=//.,";':{}\[\]]+$"#;

/// A tag: word-character runs separated by single spaces.
pub const TAG_REGEX: &str = r"^[0-9A-Za-z_]+( [0-9A-Za-z_]+)*$";

/// Four dot-separated numeric groups anywhere in the string (RFC 1123 §2.1).
pub const DOTTED_DECIMAL_REGEX: &str = r"([0-9]+\.){3}[0-9]+";

/// Permissive DNS name accepted in no_proxy entries (mixed case, underscores).
pub const NO_PROXY_DNS_NAME_REGEX: &str =
    r"^([a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})(\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*[._]?$";

// ============================================================================
// COMPILED PATTERNS
// ============================================================================

/// Compiled [`BASE_DOMAIN_REGEX`].
pub static BASE_DOMAIN: Pattern = Pattern::new("base domain", BASE_DOMAIN_REGEX);
/// Compiled [`DNS_NAME_REGEX`].
pub static DNS_NAME: Pattern = Pattern::new("DNS name", DNS_NAME_REGEX);
/// Compiled [`WILDCARD_DOMAIN_REGEX`].
pub static WILDCARD_DOMAIN: Pattern = Pattern::new("wildcard domain", WILDCARD_DOMAIN_REGEX);
/// Compiled [`HOSTNAME_REGEX`].
pub static HOSTNAME: Pattern = Pattern::new("hostname", HOSTNAME_REGEX);
/// Compiled [`INSTALLER_ARGS_VALUES_REGEX`].
pub static INSTALLER_ARGS_VALUES: Pattern =
    Pattern::new("installer argument value", INSTALLER_ARGS_VALUES_REGEX);
/// Compiled [`TAG_REGEX`].
pub static TAG: Pattern = Pattern::new("tag", TAG_REGEX);
/// Compiled [`DOTTED_DECIMAL_REGEX`].
pub static DOTTED_DECIMAL: Pattern = Pattern::new("dotted decimal", DOTTED_DECIMAL_REGEX);
/// Compiled [`NO_PROXY_DNS_NAME_REGEX`].
pub static NO_PROXY_DNS_NAME: Pattern = Pattern::new("no_proxy DNS name", NO_PROXY_DNS_NAME_REGEX);

/// A regular expression compiled on first use and shared read-only afterwards.
///
/// A compile failure is remembered and reported as an internal
/// [`ValidationError`] on every call instead of panicking.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    source: &'static str,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl Pattern {
    /// Declares a pattern. Nothing is compiled until first use.
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            compiled: OnceLock::new(),
        }
    }

    /// Human-readable pattern name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern source.
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Returns the compiled regex, compiling it on first call.
    pub fn regex(&self) -> Result<&Regex, ValidationError> {
        self.compiled
            .get_or_init(|| {
                Regex::new(self.source).inspect_err(|e| {
                    tracing::error!(pattern = self.name, error = %e, "validation pattern failed to compile");
                })
            })
            .as_ref()
            .map_err(|e| {
                ValidationError::internal(
                    "pattern_compile",
                    format!("failed to compile {} pattern: {e}", self.name),
                )
                .with_param("pattern", self.source)
            })
    }

    /// Tests `input` against the pattern.
    pub fn is_match(&self, input: &str) -> Result<bool, ValidationError> {
        Ok(self.regex()?.is_match(input))
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Returns `true` if every element satisfies `predicate`.
///
/// Stops at the first element that does not. An empty sequence is `true`.
///
/// ```
/// use cluster_validator::patterns::all_strings;
///
/// assert!(all_strings("a,b".split(','), |s| s.len() == 1));
/// assert!(!all_strings(["a", "bb"], |s| s.len() == 1));
/// assert!(all_strings(Vec::<String>::new(), |_| false));
/// ```
pub fn all_strings<I, F>(values: I, mut predicate: F) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    values.into_iter().all(|v| predicate(v.as_ref()))
}

// ============================================================================
// TESTS
// ============================================================================
