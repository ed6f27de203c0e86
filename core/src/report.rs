//! # Result Sinks
//!
//! Probes call [`Reporter::report`] from many tasks at once, so every sink
//! must serialize its own writes.

use std::sync::Mutex;

use portscan_common::network::probe::ProbeResult;

/// Receives each open port as soon as its probe completes.
pub trait Reporter: Send + Sync {
    fn report(&self, result: ProbeResult);
}

/// Keeps every result in memory until the scan is over.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    results: Mutex<Vec<ProbeResult>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results in arrival order.
    pub fn results(&self) -> Vec<ProbeResult> {
        match self.results.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Results ordered by address, then port.
    pub fn sorted(&self) -> Vec<ProbeResult> {
        let mut results = self.results();
        results.sort();
        results
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, result: ProbeResult) {
        match self.results.lock() {
            Ok(mut guard) => guard.push(result),
            Err(poisoned) => poisoned.into_inner().push(result),
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
