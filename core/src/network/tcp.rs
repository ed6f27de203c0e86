use std::time::Duration;

use async_trait::async_trait;
use portscan_common::network::probe::{ProbeResult, ProbeTask};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use crate::scanner::Prober;

/// Wall-clock limit for a single handshake. Fixed, not configurable.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Full TCP handshake probe, no privileges needed.
///
/// A port is open when `connect` succeeds within [`PROBE_TIMEOUT`]. Refused,
/// unreachable and timed out attempts all count as "not open" and are not
/// told apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnectProber;

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, task: ProbeTask) -> Option<ProbeResult> {
        match timeout(PROBE_TIMEOUT, TcpStream::connect(task.socket_addr())).await {
            Ok(Ok(stream)) => {
                drop(stream);
                Some(ProbeResult::open(task))
            }
            Ok(Err(e)) => {
                trace!("{} refused or unreachable: {e}", task.socket_addr());
                None
            }
            Err(_elapsed) => {
                trace!("{} timed out", task.socket_addr());
                None
            }
        }
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
