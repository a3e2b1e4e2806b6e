//! Sequential execution of selected profiles against a single target.
//!
//! One child process at a time, awaited synchronously; the loop is the sole
//! error boundary for invocation failures. A profile that exits non-zero (or
//! never spawns) is logged, recorded, and the batch moves on. No retries.

use std::path::PathBuf;

use is_root::is_root;
use sweepr_common::config::Config;
use sweepr_common::output::{self, OutputLayout};
use sweepr_common::profile::ScanProfile;
use sweepr_common::success;
use tracing::{error, info, warn};

use crate::exec;

/// What happened to one profile's invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Non-zero exit, or the spawn itself failed (`code: None`).
    Failed { code: Option<i32> },
}

/// Per-profile record kept for the final summary; not persisted anywhere.
#[derive(Clone, Debug)]
pub struct ScanOutcome {
    pub label: &'static str,
    pub base: PathBuf,
    pub outcome: Outcome,
}

impl ScanOutcome {
    pub fn completed(&self) -> bool {
        matches!(self.outcome, Outcome::Completed)
    }
}

/// Runs every profile in `picks` order and reports each result as it lands.
pub fn run_batch(
    cfg: &Config,
    target: &str,
    picks: &[&ScanProfile],
    layout: &OutputLayout,
) -> Vec<ScanOutcome> {
    let mut outcomes = Vec::with_capacity(picks.len());

    for profile in picks {
        outcomes.push(run_one(cfg, target, profile, layout));
    }

    outcomes
}

fn run_one(
    cfg: &Config,
    target: &str,
    profile: &ScanProfile,
    layout: &OutputLayout,
) -> ScanOutcome {
    let stamp = output::timestamp();
    let base = layout.base_path(profile.label, &stamp);
    let argv = build_argv(profile, &base, target);

    info!("running {}: {} {}", profile.label, cfg.nmap_bin, argv.join(" "));
    if profile.needs_root && !is_root() {
        warn!(
            "{} gives more reliable results as root; continuing unprivileged",
            profile.label
        );
    }

    let outcome = match exec::run_streamed(&cfg.nmap_bin, &argv) {
        Ok(status) if status.success() => {
            for file in output::sibling_files(&base) {
                success!("saved {}", file.display());
            }
            Outcome::Completed
        }
        Ok(status) => {
            match status.code() {
                Some(code) => error!("scan {} failed (exit {code})", profile.label),
                None => error!("scan {} was terminated by a signal", profile.label),
            }
            Outcome::Failed {
                code: status.code(),
            }
        }
        Err(e) => {
            error!("scan {} could not start: {e}", profile.label);
            Outcome::Failed { code: None }
        }
    };

    ScanOutcome {
        label: profile.label,
        base,
        outcome,
    }
}

/// Profile flags, then the output-base flag, then the target, as one argv.
fn build_argv(profile: &ScanProfile, base: &std::path::Path, target: &str) -> Vec<String> {
    let mut argv: Vec<String> = profile.args.split_whitespace().map(str::to_owned).collect();
    argv.push(String::from("-oA"));
    argv.push(base.display().to_string());
    argv.push(target.to_owned());
    argv
}
