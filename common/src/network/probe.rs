use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// One (address, port) pair to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProbeTask {
    pub address: u32,
    pub port: u16,
}

impl ProbeTask {
    pub fn new(address: u32, port: u16) -> Self {
        Self { address, port }
    }

    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip(), self.port))
    }
}

/// Outcome of a single probe.
///
/// Only open results are ever built by the scanner; `open` is kept so the
/// type can describe either outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProbeResult {
    pub address: u32,
    pub port: u16,
    pub open: bool,
}

impl ProbeResult {
    pub fn open(task: ProbeTask) -> Self {
        Self {
            address: task.address,
            port: task.port,
            open: true,
        }
    }

    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }
}

impl std::fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.open { "open" } else { "closed" };
        write!(f, "Port {} is {} on {}", self.port, state, self.ip())
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
