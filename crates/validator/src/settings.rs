//! Aggregate validation of an installation settings payload.
//!
//! [`InstallSettings`] mirrors the user-editable fields a cluster-install
//! request carries. [`InstallSettings::validate`] runs the matching check for
//! every field that is set and reports all failing fields at once, each
//! error tagged with its field name.
//!
//! ```
//! use cluster_validator::settings::InstallSettings;
//!
//! let settings = InstallSettings {
//!     base_dns_domain: Some("example.com".into()),
//!     http_proxy: Some("https://proxy:3128".into()),
//!     tags: Some("prod,team a".into()),
//!     ..InstallSettings::default()
//! };
//!
//! let errors = settings.validate().unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert!(errors.for_field("http_proxy").is_some());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError, ValidationErrors};
use crate::validators::{
    DomainName, HttpProxyUrl, Hostname, InstallerArgs, NoProxyList, Tags,
    validate_additional_ntp_source,
};

/// User-supplied installation settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InstallSettings {
    /// Base DNS domain of the cluster (may carry the wildcard marker).
    pub base_dns_domain: Option<String>,
    /// Requested host name.
    pub hostname: Option<String>,
    /// Comma-separated extra NTP sources.
    pub additional_ntp_source: Option<String>,
    /// Proxy used for HTTP traffic.
    pub http_proxy: Option<String>,
    /// Proxy used for HTTPS traffic (itself reached over plain HTTP).
    pub https_proxy: Option<String>,
    /// Destinations that bypass the proxy.
    pub no_proxy: Option<String>,
    /// Comma-separated free-text tags.
    pub tags: Option<String>,
    /// Base64-encoded PEM CA bundle.
    pub additional_trust_bundle: Option<String>,
    /// Extra arguments for the installer.
    pub installer_args: Option<Vec<String>>,
}

impl InstallSettings {
    /// Validates every field that is set.
    ///
    /// Fields are independent: one bad field does not stop the others from
    /// being checked. Within a field the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check(&mut errors, "base_dns_domain", self.base_dns_domain.as_deref(), &DomainName);
        check(&mut errors, "hostname", self.hostname.as_deref(), &Hostname);
        if let Some(sources) = &self.additional_ntp_source
            && !validate_additional_ntp_source(sources)
        {
            errors.add(
                ValidationError::new(
                    "invalid_ntp_source",
                    format!("Invalid NTP source(s): {sources}"),
                )
                .with_field("additional_ntp_source"),
            );
        }
        check(&mut errors, "http_proxy", self.http_proxy.as_deref(), &HttpProxyUrl);
        check(&mut errors, "https_proxy", self.https_proxy.as_deref(), &HttpProxyUrl);
        check(&mut errors, "no_proxy", self.no_proxy.as_deref(), &NoProxyList);
        check(&mut errors, "tags", self.tags.as_deref(), &Tags);
        self.check_trust_bundle(&mut errors);
        if let Some(args) = &self.installer_args
            && let Err(e) = InstallerArgs.validate(args)
        {
            errors.add(e.with_field("installer_args"));
        }

        if errors.has_errors() {
            tracing::debug!(
                rejected = errors.len(),
                internal = errors.has_internal(),
                "install settings rejected"
            );
        }
        errors.into_result(())
    }

    #[cfg(feature = "certificate")]
    fn check_trust_bundle(&self, errors: &mut ValidationErrors) {
        check(
            errors,
            "additional_trust_bundle",
            self.additional_trust_bundle.as_deref(),
            &crate::validators::CaCertificate,
        );
    }

    #[cfg(not(feature = "certificate"))]
    fn check_trust_bundle(&self, _errors: &mut ValidationErrors) {}
}

fn check<V>(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>, validator: &V)
where
    V: Validate<Input = str>,
{
    if let Some(value) = value
        && let Err(e) = validator.validate(value)
    {
        errors.add(e.with_field(field));
    }
}
