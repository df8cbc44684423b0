//! Registry behaviour once a provider has been enabled
//!
//! Every test enables its own provider first, so they run serially against the
//! process-wide registry.

mod helper;

use serde_json::json;
use serial_test::serial;

use helper::host_version_info;
use version_info::report::{build_info_document, shell_version};
use version_info::version::registry::is_enabled;
use version_info::{NotEnabledAction, VersionInfo, enable, instance};

fn same_provider(a: &dyn VersionInfo, b: &dyn VersionInfo) -> bool {
    std::ptr::addr_eq(a, b)
}

#[test]
#[serial]
fn instance_returns_enabled_provider_for_every_action() {
    let provider = host_version_info("4.2.1", [4, 2, 1, 0]);

    enable(provider);

    assert!(is_enabled());
    assert!(same_provider(instance(NotEnabledAction::Fallback), provider));
    assert!(same_provider(instance(NotEnabledAction::Fatal), provider));
}

#[test]
#[serial]
fn enable_replaces_previous_provider() {
    let first = host_version_info("4.2.1", [4, 2, 1, 0]);
    let second = host_version_info("5.0.0", [5, 0, 0, 0]);

    enable(first);
    enable(second);

    let active = instance(NotEnabledAction::Fatal);
    assert!(same_provider(active, second));
    assert_eq!(active.version(), "5.0.0");
    assert!(active.is_same_major_minor("5.0.3"));
    assert!(!active.is_same_major_minor("4.2.1"));
}

#[test]
#[serial]
fn report_and_banner_follow_enabled_provider() {
    enable(host_version_info("1.2.3", [1, 2, 3, 4]));

    let provider = instance(NotEnabledAction::Fallback);
    let document = build_info_document(provider);

    assert_eq!(document["version"], "1.2.3");
    assert_eq!(document["versionArray"], json!([1, 2, 3, 4]));
    assert_eq!(document["buildEnvironment"], json!({"distmod": "rhel80", "cppdefines": ""}));
    assert_eq!(shell_version(provider), "MongoDB shell version v1.2.3");
}
