//! Thin wrappers around `std::process` for the two ways the scanner is run.
//!
//! Arguments are always passed as an explicit vector, never through a shell,
//! so profile flags and targets cannot be reinterpreted by quoting.

use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Runs `program`, streaming its stdout/stderr to ours, and waits for exit.
pub fn run_streamed<I, S>(program: &str, args: I) -> io::Result<ExitStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(program).args(args).status()
}

/// Runs `program` with all of its output discarded, and waits for exit.
pub fn run_silent<I, S>(program: &str, args: I) -> io::Result<ExitStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
}
