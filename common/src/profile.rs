//! # Scan Profile Registry
//!
//! The canned nmap argument sets this tool knows how to run.
//!
//! The registry is built once as a static table and never mutated. Its order
//! doubles as the presentation order in the interactive menu and the default
//! execution order.

/// A named, predefined set of nmap arguments.
///
/// Identity is the label, which also becomes the stem of every output file
/// the profile produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanProfile {
    pub label: &'static str,
    /// Whitespace-separated nmap flags; split into an argv at spawn time.
    pub args: &'static str,
    /// Advisory only. The scan still runs without root, with degraded accuracy.
    pub needs_root: bool,
}

pub const PROFILES: &[ScanProfile] = &[
    ScanProfile {
        label: "tcp_quick_top1000",
        args: "-sS -T4 --top-ports 1000 -Pn",
        needs_root: false,
    },
    ScanProfile {
        label: "tcp_full_all_ports",
        args: "-sS -p- -T3 -Pn",
        needs_root: false,
    },
    ScanProfile {
        label: "service_version",
        args: "-sV -sC -T4 -Pn",
        needs_root: false,
    },
    ScanProfile {
        label: "udp_top100",
        args: "-sU --top-ports 100 -T3 -Pn",
        needs_root: true,
    },
    ScanProfile {
        label: "os_detection",
        args: "-O -sV -T4 -Pn",
        needs_root: true,
    },
    ScanProfile {
        label: "nse_vuln",
        args: "-sV --script vuln -T4 -Pn",
        needs_root: false,
    },
    ScanProfile {
        label: "default_scripts",
        args: "-sC -T4 -Pn",
        needs_root: false,
    },
];

/// Looks up a profile by its 1-based menu index.
pub fn by_index(index: usize) -> Option<&'static ScanProfile> {
    index.checked_sub(1).and_then(|i| PROFILES.get(i))
}
