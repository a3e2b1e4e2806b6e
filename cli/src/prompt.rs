//! One-shot, line-oriented prompts on stdin.
//!
//! Each prompt is a single synchronous read; there is no raw mode and no
//! event loop. Questions are written with a bare `print!` so the cursor can
//! sit on the same line as the answer.

use std::io::{self, Write};

use sweepr_common::profile::{PROFILES, ScanProfile};
use sweepr_common::select::{self, Picks};
use tracing::warn;

use crate::terminal::print;

pub enum Mode {
    All,
    Interactive,
}

fn ask(question: &str) -> anyhow::Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for the target when it was not given on the command line.
///
/// An empty answer is fatal: there is nothing sensible to scan.
pub fn target() -> anyhow::Result<String> {
    let answer = ask("Enter target IP or hostname: ")?;
    if answer.is_empty() {
        anyhow::bail!("no target provided");
    }
    Ok(answer)
}

/// Mode menu; empty input defaults to running everything.
pub fn mode() -> anyhow::Result<Mode> {
    print::blank();
    print::status("Choose scan mode:");
    print::status("  1) Run ALL predefined scans (recommended)");
    print::status("  2) Choose scans to run (interactive)");

    let answer = ask("Select 1 or 2 [1]: ")?;
    Ok(match answer.as_str() {
        "2" => Mode::Interactive,
        _ => Mode::All,
    })
}

/// Shows the numbered registry and resolves the entered pick list.
pub fn pick_profiles() -> anyhow::Result<Picks<'static>> {
    print::blank();
    print::status("Available scans:");
    for (idx, profile) in PROFILES.iter().enumerate() {
        menu_row(idx + 1, profile);
    }

    let answer = ask("Enter numbers separated by comma (e.g. 1,3,5) or 'all': ")?;
    let picks = select::parse_picks(&answer, PROFILES);
    if picks.used_fallback {
        warn!("invalid selection, defaulting to all scans");
    }
    Ok(picks)
}

fn menu_row(idx: usize, profile: &ScanProfile) {
    let detail = format!("->  nmap {}", profile.args);
    print::menu_entry(idx, profile.label, &detail);
}
