mod args;
mod prompt;
mod terminal;

use args::CommandLine;
use colored::*;
use sweepr_common::config::Config;
use sweepr_common::output::OutputLayout;
use sweepr_common::profile::PROFILES;
use sweepr_common::select::Picks;
use sweepr_core::runner::ScanOutcome;
use sweepr_core::{preflight, runner};
use tracing::{info, warn};

use crate::terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config::default();
    print::banner(cfg.no_banner, cfg.quiet);

    let target = resolve_target(commands.target)?;

    preflight::ensure_scanner(&cfg)?;

    let layout = OutputLayout::for_target(&cfg.results_root, &target);
    layout.ensure()?;
    info!("results directory: {}", layout.dir().display());

    let picks: Picks = match prompt::mode()? {
        prompt::Mode::All => Picks::all(PROFILES),
        prompt::Mode::Interactive => prompt::pick_profiles()?,
    };

    print::blank();
    print::header(
        &format!("running {} scans against {}", picks.profiles.len(), target),
        cfg.quiet,
    );

    let outcomes = runner::run_batch(&cfg, &target, &picks.profiles, &layout);

    summary(&outcomes);
    Ok(())
}

/// Positional argument verbatim (trimmed), otherwise an interactive prompt.
/// Either way an empty target is fatal.
fn resolve_target(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(raw) => {
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() {
                anyhow::bail!("no target provided");
            }
            Ok(trimmed)
        }
        None => prompt::target(),
    }
}

/// Batch completion is success even when individual scans failed; only the
/// counts differ.
fn summary(outcomes: &[ScanOutcome]) {
    let completed = outcomes.iter().filter(|o| o.completed()).count();
    let failed = outcomes.len() - completed;

    print::blank();
    print::fat_separator();
    let completed_str: ColoredString = format!("{completed} completed").bold().green();
    let failed_str: ColoredString = if failed == 0 {
        format!("{failed} failed").bright_black()
    } else {
        format!("{failed} failed").bold().red()
    };
    print::centerln(&format!("All scans finished: {completed_str}, {failed_str}"));
    print::end_of_program();

    info!("check the results directory for output files");
    warn!("for better UDP/OS accuracy run as root (sudo)");
    warn!("only scan targets you have permission to test");
}
