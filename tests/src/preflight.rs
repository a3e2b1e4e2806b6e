#![cfg(all(test, unix))]

use sweepr_common::config::Config;
use sweepr_core::preflight::{self, PreflightError};

fn config_with_bin(bin: &str) -> Config {
    Config {
        nmap_bin: bin.to_string(),
        ..Config::default()
    }
}

#[test]
fn working_tool_passes() {
    // `true -V` exits zero, which is all the probe asks for.
    let cfg = config_with_bin("true");
    assert!(preflight::ensure_scanner(&cfg).is_ok());
}

#[test]
fn missing_tool_is_fatal() {
    let cfg = config_with_bin("sweepr-definitely-not-installed");
    match preflight::ensure_scanner(&cfg) {
        Err(PreflightError::NotFound { bin, .. }) => {
            assert_eq!(bin, "sweepr-definitely-not-installed");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn broken_tool_is_fatal() {
    // `false -V` exits non-zero, mimicking a corrupt install.
    let cfg = config_with_bin("false");
    match preflight::ensure_scanner(&cfg) {
        Err(PreflightError::Broken { bin, status }) => {
            assert_eq!(bin, "false");
            assert!(!status.success());
        }
        other => panic!("expected Broken, got {other:?}"),
    }
}

#[test]
fn guidance_mentions_how_to_install() {
    let cfg = config_with_bin("sweepr-definitely-not-installed");
    let err = preflight::ensure_scanner(&cfg).unwrap_err();
    assert!(err.to_string().contains("Install nmap"));
}
