//! # cluster-validator
//!
//! Validation of user-supplied cluster installation settings: domain names,
//! hostnames, NTP sources, proxy URLs, installer boot arguments, tags and
//! base64-encoded CA certificates.
//!
//! Every check is a pure function of its input. Nothing is resolved,
//! fetched or trusted; the checks are purely syntactic or structural.
//!
//! ## Quick Start
//!
//! ```
//! use cluster_validator::prelude::*;
//!
//! assert!(validate_hostname("master-0.example.com").is_ok());
//! assert!(validate_ntp_source("203.0.113.5"));
//! assert!(validate_no_proxy_format(".example.com,10.0.0.0/8").is_ok());
//!
//! // The domain check tells bad input (400) from internal failure (500).
//! let result = validate_domain_name_format("192.168.1.1");
//! assert_eq!(status_hint(&result), 400);
//! ```
//!
//! ## Composing
//!
//! Validators implement [`Validate`](foundation::Validate) and combine with
//! [`ValidateExt::or`](foundation::ValidateExt::or):
//!
//! ```
//! use cluster_validator::prelude::*;
//!
//! let target = IpAddress.or(Cidr);
//! assert!(target.validate("10.0.0.0/8").is_ok());
//! ```
//!
//! ## Features
//!
//! - `certificate` (default): [`validate_ca_certificate`](validators::validate_ca_certificate).
//! - `serde` (default): `Serialize` / `Deserialize` for
//!   [`InstallSettings`](settings::InstallSettings).

pub mod combinators;
pub mod foundation;
mod macros;
pub mod patterns;
pub mod prelude;
pub mod settings;
pub mod validators;
