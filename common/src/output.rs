//! Filesystem layout for scan results.
//!
//! Every run of a profile gets a base path `results/<target>/<label>_<stamp>`
//! which nmap expands into three sibling files via `-oA`. This module only
//! names paths; the files themselves are written by nmap.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use tracing::debug;

/// Extensions nmap produces for an `-oA <base>` run, in reporting order.
pub const OUTPUT_EXTENSIONS: [&str; 3] = ["nmap", "xml", "gnmap"];

/// Where one target's scan outputs live: `<results_root>/<target>`.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    pub fn for_target(results_root: &Path, target: &str) -> Self {
        Self {
            dir: results_root.join(target),
        }
    }

    /// Creates the directory tree; a second call is a no-op.
    pub fn ensure(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create results directory {}", self.dir.display()))?;
        debug!("results directory ready at {}", self.dir.display());
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Base path, without extension, at which nmap writes its output files.
    pub fn base_path(&self, label: &str, stamp: &str) -> PathBuf {
        self.dir.join(format!("{label}_{stamp}"))
    }
}

/// Second-resolution local time, e.g. `20260830_143012`.
///
/// Two runs starting within the same second would share a base path. Profiles
/// execute strictly one after another today, so that cannot happen; revisit
/// the format before ever running profiles in parallel.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// The three sibling files nmap emits for a given base path.
pub fn sibling_files(base: &Path) -> [PathBuf; 3] {
    OUTPUT_EXTENSIONS.map(|ext| base.with_extension(ext))
}
