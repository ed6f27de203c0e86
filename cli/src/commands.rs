pub mod scan;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "portscan")]
#[command(version, about = "A concurrent TCP connect scanner.")]
pub struct CommandLine {
    /// IPv4 range to scan, e.g. "192.168.1.1-192.168.1.254"
    #[arg(value_name = "RANGE", default_value = "")]
    pub range: String,

    /// Ports to probe, e.g. "22,80,8000-8010"
    #[arg(value_name = "PORTS", default_value = "")]
    pub ports: String,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print open ports ordered by address and port once the scan is done
    #[arg(long)]
    pub sort: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
