#![cfg(test)]
use portscan_common::network::ports::PortSet;
use portscan_common::network::probe::{ProbeResult, ProbeTask};
use portscan_common::network::range::AddressRange;
use portscan_core::network::tcp::{PROBE_TIMEOUT, TcpConnectProber};
use portscan_core::report::CollectingReporter;
use portscan_core::scanner::{self, ScanSummary};
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::utils::{closed_port, open_port};

async fn run_scan(range: &str, ports: &str) -> anyhow::Result<(ScanSummary, Vec<ProbeResult>)> {
    let range: AddressRange = range.parse()?;
    let ports: PortSet = ports.parse()?;
    let reporter = Arc::new(CollectingReporter::new());

    let summary =
        scanner::perform_scan(range, &ports, Arc::new(TcpConnectProber), reporter.clone()).await?;

    Ok((summary, reporter.results()))
}

fn open_on(ip: Ipv4Addr, port: u16) -> ProbeResult {
    ProbeResult::open(ProbeTask::new(u32::from(ip), port))
}

/// One listener surrounded by closed ports: exactly one line comes out.
#[tokio::test]
async fn single_open_port_among_closed_ones() -> anyhow::Result<()> {
    let localhost = Ipv4Addr::LOCALHOST;
    let (_listener, port) = open_port(localhost).await;
    let before = closed_port(localhost).await;
    let after = closed_port(localhost).await;

    let (summary, results) =
        run_scan("127.0.0.1-127.0.0.1", &format!("{before},{port},{after}")).await?;

    assert_eq!(results, vec![open_on(localhost, port)]);
    assert_eq!(results[0].to_string(), format!("Port {port} is open on 127.0.0.1"));
    assert_eq!(summary, ScanSummary { dispatched: 3, open: 1 });
    Ok(())
}

#[tokio::test]
async fn closed_ports_are_silent_and_bounded_by_the_timeout() -> anyhow::Result<()> {
    let localhost = Ipv4Addr::LOCALHOST;
    let first = closed_port(localhost).await;
    let second = closed_port(localhost).await;

    let started = Instant::now();
    let (summary, results) =
        run_scan("127.0.0.1-127.0.0.1", &format!("{first},{second}")).await?;

    assert!(results.is_empty(), "Closed ports were reported: {results:?}");
    assert_eq!(summary.open, 0);
    assert!(
        started.elapsed() < PROBE_TIMEOUT + Duration::from_millis(500),
        "Scan took {:?}",
        started.elapsed()
    );
    Ok(())
}

#[tokio::test]
async fn repeated_scans_find_the_same_set() -> anyhow::Result<()> {
    let localhost = Ipv4Addr::LOCALHOST;
    let (_first, port_a) = open_port(localhost).await;
    let (_second, port_b) = open_port(localhost).await;
    let closed = closed_port(localhost).await;
    let ports = format!("{port_a},{closed},{port_b}");

    let (_, run_one) = run_scan("127.0.0.1-127.0.0.1", &ports).await?;
    let (_, run_two) = run_scan("127.0.0.1-127.0.0.1", &ports).await?;

    let run_one: HashSet<ProbeResult> = run_one.into_iter().collect();
    let run_two: HashSet<ProbeResult> = run_two.into_iter().collect();
    let expected: HashSet<ProbeResult> =
        [open_on(localhost, port_a), open_on(localhost, port_b)].into();

    assert_eq!(run_one, expected);
    assert_eq!(run_one, run_two);
    Ok(())
}

/// Every 127/8 address is loopback on Linux, so a range can be scanned
/// without touching the real network.
#[tokio::test]
#[cfg(target_os = "linux")]
async fn only_the_listening_address_in_a_range_is_reported() -> anyhow::Result<()> {
    let target = Ipv4Addr::new(127, 0, 0, 2);
    let (_listener, port) = open_port(target).await;

    let (summary, results) = run_scan("127.0.0.1-127.0.0.3", &port.to_string()).await?;

    assert_eq!(results, vec![open_on(target, port)]);
    assert_eq!(summary.dispatched, 3);
    Ok(())
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn sorted_results_follow_address_then_port() -> anyhow::Result<()> {
    let low = Ipv4Addr::new(127, 0, 0, 2);
    let high = Ipv4Addr::new(127, 0, 0, 3);
    let (_a, port_low_a) = open_port(low).await;
    let (_b, port_low_b) = open_port(low).await;
    let (_c, port_high) = open_port(high).await;

    let range: AddressRange = "127.0.0.2-127.0.0.3".parse()?;
    let ports: PortSet = format!("{port_high},{port_low_a},{port_low_b}").parse()?;
    let reporter = Arc::new(CollectingReporter::new());
    scanner::perform_scan(range, &ports, Arc::new(TcpConnectProber), reporter.clone()).await?;

    let mut low_ports = [port_low_a, port_low_b];
    low_ports.sort();
    let expected = vec![
        open_on(low, low_ports[0]),
        open_on(low, low_ports[1]),
        open_on(high, port_high),
    ];

    assert_eq!(reporter.sorted(), expected);
    Ok(())
}

#[tokio::test]
async fn parse_errors_stop_before_any_probe() {
    assert!(run_scan("", "80").await.is_err());
    assert!(run_scan("127.0.0.1-127.0.0.1", "").await.is_err());
    assert!(run_scan("127.0.0.2-127.0.0.1", "80").await.is_err());
    assert!(run_scan("127.0.0.1-127.0.0.1", "100-50").await.is_err());
}
