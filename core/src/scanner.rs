//! The scan **dispatcher**.
//!
//! Expands an [`AddressRange`] x [`PortSet`] into one [`ProbeTask`] per pair and
//! runs every one of them as its own tokio task. There is no concurrency cap:
//! a /16 against 1000 ports really does spawn 65 million tasks. The dispatcher
//! then waits until every probe has resolved before returning.
//!
//! How a port is probed is behind the [`Prober`] trait, and where an open port
//! ends up is behind [`Reporter`], so this module only deals with fan-out and
//! the completion barrier.

use std::sync::Arc;

use async_trait::async_trait;
use portscan_common::network::{
    ports::PortSet,
    probe::{ProbeResult, ProbeTask},
    range::AddressRange,
};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::report::Reporter;

/// Decides whether a single (address, port) pair is open.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns `Some` only for an open port. Failures of any kind are `None`.
    async fn probe(&self, task: ProbeTask) -> Option<ProbeResult>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub dispatched: u64,
    pub open: u64,
}

/// Probes every address of `range` on every port of `ports`.
///
/// Open ports are handed to `reporter` as they are found, in completion
/// order. Returns once all probes have finished; none are cancelled early.
pub async fn perform_scan<P, R>(
    range: AddressRange,
    ports: &PortSet,
    prober: Arc<P>,
    reporter: Arc<R>,
) -> anyhow::Result<ScanSummary>
where
    P: Prober + ?Sized + 'static,
    R: Reporter + ?Sized + 'static,
{
    let mut probes: JoinSet<bool> = JoinSet::new();
    let mut summary = ScanSummary::default();

    for address in range.to_iter() {
        for &port in ports {
            let task = ProbeTask::new(address, port);
            let prober = prober.clone();
            let reporter = reporter.clone();

            probes.spawn(async move {
                match prober.probe(task).await {
                    Some(result) => {
                        reporter.report(result);
                        true
                    }
                    None => false,
                }
            });
            summary.dispatched += 1;
        }
    }

    debug!("Dispatched {} probes against {range}", summary.dispatched);

    // Drain to empty even if a task died, so the barrier always holds.
    let mut first_failure = None;
    while let Some(joined) = probes.join_next().await {
        match joined {
            Ok(true) => summary.open += 1,
            Ok(false) => {}
            Err(e) => {
                error!("Probe task failed: {e}");
                first_failure.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_failure {
        return Err(anyhow::Error::new(e).context("a probe task did not complete"));
    }

    info!(
        "Scan complete: {} open out of {} probes",
        summary.open, summary.dispatched
    );
    Ok(summary)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
