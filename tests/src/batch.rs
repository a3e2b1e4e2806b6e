#![cfg(all(test, unix))]

use std::collections::HashSet;
use std::path::Path;

use sweepr_common::config::Config;
use sweepr_common::output::OutputLayout;
use sweepr_common::profile::ScanProfile;
use sweepr_core::runner::{self, Outcome};
use tempfile::TempDir;

// Stand-ins for nmap: `true` and `false` accept any argv and exit 0 / 1.
const FAKE_PROFILES: &[ScanProfile] = &[
    ScanProfile {
        label: "first",
        args: "-a -b",
        needs_root: false,
    },
    ScanProfile {
        label: "second",
        args: "-c",
        needs_root: false,
    },
    ScanProfile {
        label: "third",
        args: "",
        needs_root: false,
    },
];

fn test_config(bin: &str, results_root: &Path) -> Config {
    Config {
        nmap_bin: bin.to_string(),
        results_root: results_root.to_path_buf(),
        no_banner: true,
        quiet: 0,
    }
}

fn ready_layout(cfg: &Config, target: &str) -> OutputLayout {
    let layout = OutputLayout::for_target(&cfg.results_root, target);
    layout.ensure().expect("results directory should be creatable");
    layout
}

#[test]
fn every_selected_profile_is_invoked_once() {
    let scratch = TempDir::new().unwrap();
    let cfg = test_config("true", scratch.path());
    let layout = ready_layout(&cfg, "10.0.0.5");

    let picks: Vec<&ScanProfile> = FAKE_PROFILES.iter().collect();
    let outcomes = runner::run_batch(&cfg, "10.0.0.5", &picks, &layout);

    assert_eq!(outcomes.len(), FAKE_PROFILES.len());
    for (outcome, profile) in outcomes.iter().zip(FAKE_PROFILES) {
        assert_eq!(outcome.label, profile.label);
        assert!(outcome.completed(), "{} should have completed", outcome.label);
    }
}

#[test]
fn base_paths_are_labeled_and_distinct() {
    let scratch = TempDir::new().unwrap();
    let cfg = test_config("true", scratch.path());
    let layout = ready_layout(&cfg, "10.0.0.5");

    let picks: Vec<&ScanProfile> = FAKE_PROFILES.iter().collect();
    let outcomes = runner::run_batch(&cfg, "10.0.0.5", &picks, &layout);

    let mut seen = HashSet::new();
    for outcome in &outcomes {
        assert!(outcome.base.starts_with(layout.dir()));
        let stem = outcome.base.file_name().unwrap().to_str().unwrap();
        assert!(
            stem.starts_with(&format!("{}_", outcome.label)),
            "base path {stem} should start with its label"
        );
        assert!(seen.insert(outcome.base.clone()), "base paths must not collide");
    }
}

#[test]
fn failing_scans_do_not_stop_the_batch() {
    let scratch = TempDir::new().unwrap();
    let cfg = test_config("false", scratch.path());
    let layout = ready_layout(&cfg, "10.0.0.5");

    let picks: Vec<&ScanProfile> = FAKE_PROFILES.iter().collect();
    let outcomes = runner::run_batch(&cfg, "10.0.0.5", &picks, &layout);

    // Every profile was still attempted, each recorded as a failure.
    assert_eq!(outcomes.len(), FAKE_PROFILES.len());
    for outcome in &outcomes {
        assert_eq!(outcome.outcome, Outcome::Failed { code: Some(1) });
    }
}

#[test]
fn unspawnable_binary_is_a_per_profile_failure() {
    let scratch = TempDir::new().unwrap();
    let cfg = test_config("sweepr-no-such-binary", scratch.path());
    let layout = ready_layout(&cfg, "10.0.0.5");

    let picks: Vec<&ScanProfile> = FAKE_PROFILES.iter().collect();
    let outcomes = runner::run_batch(&cfg, "10.0.0.5", &picks, &layout);

    assert_eq!(outcomes.len(), FAKE_PROFILES.len());
    for outcome in &outcomes {
        assert_eq!(outcome.outcome, Outcome::Failed { code: None });
    }
}

#[test]
fn results_directory_creation_is_idempotent() {
    let scratch = TempDir::new().unwrap();
    let layout = OutputLayout::for_target(scratch.path(), "scanme.example");

    layout.ensure().unwrap();
    layout.ensure().unwrap();

    assert!(layout.dir().is_dir());
    assert!(layout.dir().ends_with("scanme.example"));
}
