//! One-time check that the scanner binary is usable before any work starts.

use std::process::ExitStatus;

use sweepr_common::config::Config;
use thiserror::Error;

use crate::exec;

#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("'{bin}' was not found. Install nmap (e.g. `sudo apt install nmap`) and re-run")]
    NotFound {
        bin: String,
        source: std::io::Error,
    },
    #[error("`{bin} -V` exited with {status}; the nmap install looks broken")]
    Broken { bin: String, status: ExitStatus },
}

/// Probes `<nmap_bin> -V` with its output suppressed.
///
/// This is the only hard failure path besides an empty target: callers are
/// expected to let the error propagate and terminate before any scan runs.
pub fn ensure_scanner(cfg: &Config) -> Result<(), PreflightError> {
    match exec::run_silent(&cfg.nmap_bin, ["-V"]) {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(PreflightError::Broken {
            bin: cfg.nmap_bin.clone(),
            status,
        }),
        Err(source) => Err(PreflightError::NotFound {
            bin: cfg.nmap_bin.clone(),
            source,
        }),
    }
}
