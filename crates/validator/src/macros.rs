//! Macros for creating validators with minimal boilerplate.
//!
//! ```rust,ignore
//! use cluster_validator::validator;
//! use cluster_validator::foundation::ValidationError;
//!
//! validator! {
//!     /// Accepts IP addresses.
//!     pub IpAddress for str;
//!     rule(input) { input.parse::<std::net::IpAddr>().is_ok() }
//!     error(input) { ValidationError::new("invalid_ip", format!("{input} is not an IP address")) }
//!     fn ip_address();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation,
/// and optionally a `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied.
///
/// The `rule` block evaluates to `bool`; `error` builds the
/// [`ValidationError`](crate::foundation::ValidationError) returned when the
/// rule is `false`.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[doc = concat!("Creates a new [`", stringify!($name), "`] validator.")]
        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
