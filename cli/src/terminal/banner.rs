use colored::*;

use crate::terminal::print;

const ART: &[&str] = &[
    "███████╗██╗    ██╗███████╗███████╗██████╗ ██████╗ ",
    "██╔════╝██║    ██║██╔════╝██╔════╝██╔══██╗██╔══██╗",
    "███████╗██║ █╗ ██║█████╗  █████╗  ██████╔╝██████╔╝",
    "╚════██║██║███╗██║██╔══╝  ██╔══╝  ██╔═══╝ ██╔══██╗",
    "███████║╚███╔███╔╝███████╗███████╗██║     ██║  ██║",
    "╚══════╝ ╚══╝╚══╝ ╚══════╝╚══════╝╚═╝     ╚═╝  ╚═╝",
];

pub fn print() {
    for line in ART {
        print::centerln(&format!("{}", line.bright_green()));
    }
    print::centerln(&format!(
        "{}",
        "batch nmap profile runner".bright_black().italic()
    ));
    print::blank();
}
