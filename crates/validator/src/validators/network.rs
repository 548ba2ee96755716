//! IP address and CIDR primitives.

use std::net::IpAddr;

use ipnet::IpNet;

use crate::foundation::ValidationError;

crate::validator! {
    /// Accepts IPv4 and IPv6 addresses.
    ///
    /// ```
    /// use cluster_validator::foundation::Validate;
    /// use cluster_validator::validators::IpAddress;
    ///
    /// assert!(IpAddress.validate("203.0.113.5").is_ok());
    /// assert!(IpAddress.validate("2001:db8::1").is_ok());
    /// assert!(IpAddress.validate("203.0.113").is_err());
    /// ```
    pub IpAddress for str;
    rule(input) { input.parse::<IpAddr>().is_ok() }
    error(input) {
        ValidationError::new("invalid_ip", format!("{input} is not a valid IP address"))
    }
    fn ip_address();
}

crate::validator! {
    /// Accepts CIDR blocks (`address/prefix`); host bits may be set.
    pub Cidr for str;
    rule(input) { input.parse::<IpNet>().is_ok() }
    error(input) {
        ValidationError::new("invalid_cidr", format!("{input} is not a valid CIDR"))
    }
    fn cidr();
}
