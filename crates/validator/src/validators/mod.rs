//! Built-in validators
//!
//! Each subject has a `Validate` implementor (for composition) and a free
//! function with the plain contract the API layer calls.
//!
//! # Categories
//!
//! - **Naming**: domain names, hostnames
//! - **Network sources**: NTP sources, HTTP / proxy URLs, no_proxy lists
//! - **Installer**: boot argument allow-list
//! - **Free text**: tags
//! - **Certificates**: base64 PEM CA bundles (feature `certificate`)

// Naming validators
pub mod domain;
pub mod hostname;

// Network validators
pub mod http_url;
pub mod network;
pub mod no_proxy;
pub mod ntp;

// Installer validators
pub mod installer_args;

// Free text validators
pub mod tags;

// Certificate validators
#[cfg(feature = "certificate")]
pub mod certificate;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use domain::{
    BaseDomain, DnsName, DomainName, domain_name, is_dotted_decimal_domain, unwrap_wildcard,
    validate_domain_name_format,
};
pub use hostname::{Hostname, hostname, validate_hostname};

pub use http_url::{HttpProxyUrl, HttpUrl, validate_http_format, validate_http_proxy_format};
pub use network::{Cidr, IpAddress, cidr, ip_address};
pub use no_proxy::{
    NO_PROXY_WILDCARD, NoProxyDnsName, NoProxyEntry, NoProxyList, validate_no_proxy_format,
};
pub use ntp::{NtpSource, ntp_source, validate_additional_ntp_source, validate_ntp_source};

pub use installer_args::{
    ALLOWED_INSTALLER_FLAGS, InstallerArg, InstallerArgs, validate_installer_args,
};

pub use tags::{Tag, Tags, is_valid_tag, validate_tags};

#[cfg(feature = "certificate")]
pub use certificate::{CaCertificate, count_parseable_certificates, validate_ca_certificate};
