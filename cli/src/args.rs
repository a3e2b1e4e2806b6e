use clap::Parser;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "Runs a set of predefined nmap scans against one target.")]
pub struct CommandLine {
    /// Target IP or hostname; prompted for interactively when omitted
    pub target: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
