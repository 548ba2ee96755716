//! Integration tests for `InstallSettings` payloads.

use cluster_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn settings(value: serde_json::Value) -> InstallSettings {
    serde_json::from_value(value).expect("payload should deserialize")
}

#[test]
fn full_valid_payload() {
    let settings = settings(json!({
        "base_dns_domain": "validateNoWildcardDNS.example.com.",
        "hostname": "master-0.example.com",
        "additional_ntp_source": "203.0.113.5,time.example.com",
        "http_proxy": "http://proxy.example.com:3128",
        "https_proxy": "http://proxy.example.com:3128",
        "no_proxy": ".cluster.local,10.0.0.0/8,fd00::/8",
        "tags": "prod,team a",
        "installer_args": ["--append-karg", "ip=dhcp", "-n"]
    }));

    assert_eq!(settings.validate(), Ok(()));
}

#[test]
fn missing_fields_default_to_none() {
    let settings = settings(json!({ "hostname": "node-1" }));
    assert_eq!(settings.base_dns_domain, None);
    assert_eq!(settings.installer_args, None);
    assert!(settings.validate().is_ok());
}

#[test]
fn unknown_fields_are_rejected() {
    let result: Result<InstallSettings, _> =
        serde_json::from_value(json!({ "hostname": "node-1", "proxy": "http://p:3128" }));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("unknown field `proxy`"), "{err}");
}

#[test]
fn errors_are_tagged_with_field_names() {
    let settings = settings(json!({
        "base_dns_domain": "192.168.1.1",
        "https_proxy": "https://proxy:3128",
        "tags": "tag!,x"
    }));

    let errors = settings.validate().unwrap_err();
    assert_eq!(errors.len(), 3);

    let domain = errors.for_field("base_dns_domain").expect("domain error");
    assert_eq!(domain.code, "dns_format_mismatch");

    let proxy = errors.for_field("https_proxy").expect("proxy error");
    assert_eq!(proxy.code, "https_proxy_unsupported");

    let tags = errors.for_field("tags").expect("tags error");
    assert_eq!(tags.code, "invalid_tags");

    assert!(errors.for_field("hostname").is_none());
    assert_eq!(errors.status(), http::StatusCode::BAD_REQUEST);
}

#[test]
fn empty_tags_are_valid() {
    let settings = settings(json!({ "tags": "" }));
    assert!(settings.validate().is_ok());
}

#[test]
fn serialize_round_trip_keeps_unset_fields() {
    let original = InstallSettings {
        hostname: Some("node-1".into()),
        no_proxy: Some("*".into()),
        ..InstallSettings::default()
    };

    let value = serde_json::to_value(&original).expect("serialize");
    assert_eq!(value["hostname"], "node-1");
    assert_eq!(value["base_dns_domain"], serde_json::Value::Null);

    let back: InstallSettings = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, original);
}

#[test]
fn display_lists_every_failure() {
    let settings = settings(json!({
        "hostname": "-bad",
        "installer_args": ["--bad-flag"]
    }));

    let rendered = settings.validate().unwrap_err().to_string();
    assert!(rendered.contains("[hostname] Hostname format mismatch: -bad"), "{rendered}");
    assert!(rendered.contains("[installer_args] found unexpected flag --bad-flag"), "{rendered}");
}

#[cfg(feature = "certificate")]
#[test]
fn trust_bundle_is_checked() {
    let settings = settings(json!({ "additional_trust_bundle": "not base64!" }));
    let errors = settings.validate().unwrap_err();

    let bundle = errors.for_field("additional_trust_bundle").expect("bundle error");
    assert_eq!(bundle.code, "certificate_decode");
    assert_eq!(bundle.kind, ErrorKind::Decode);
}
