use std::sync::Arc;

use portscan_common::{
    config::Config,
    network::{ports::PortSet, range::AddressRange},
};
use portscan_core::{
    network::tcp::TcpConnectProber,
    report::CollectingReporter,
    scanner,
};
use tracing::info;

use crate::terminal::print::{self, StdoutReporter};

/// Parses both arguments, then probes every pair.
///
/// A parse error returns before any probe is sent.
pub async fn scan(range: &str, ports: &str, cfg: &Config) -> anyhow::Result<()> {
    let range: AddressRange = range.parse()?;
    let ports: PortSet = ports.parse()?;

    info!(
        "Probing {} addresses ({range}) on {} ports",
        range.len(),
        ports.len()
    );

    let prober = Arc::new(TcpConnectProber);

    if cfg.sort {
        let collector = Arc::new(CollectingReporter::new());
        scanner::perform_scan(range, &ports, prober, collector.clone()).await?;
        print::results(&collector.sorted());
    } else {
        scanner::perform_scan(range, &ports, prober, Arc::new(StdoutReporter)).await?;
    }

    Ok(())
}
