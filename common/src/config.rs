use std::path::PathBuf;

/// Runtime knobs threaded through the layers by reference.
#[derive(Clone, Debug)]
pub struct Config {
    /// Binary invoked for every scan and for the preflight probe.
    pub nmap_bin: String,
    /// Parent directory of per-target result directories.
    pub results_root: PathBuf,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nmap_bin: String::from("nmap"),
            results_root: PathBuf::from("results"),
            no_banner: false,
            quiet: 0,
        }
    }
}
