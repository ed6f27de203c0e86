use std::io::Write;

use portscan_common::network::probe::ProbeResult;
use portscan_core::report::Reporter;

/// Streams each open port to stdout as soon as it is found.
///
/// Each line is written under the stdout lock, so concurrent probes never
/// interleave partial lines.
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, result: ProbeResult) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{result}");
    }
}

pub fn results(results: &[ProbeResult]) {
    let mut out = std::io::stdout().lock();
    for result in results {
        let _ = writeln!(out, "{result}");
    }
}

/// The single line printed when the run cannot go ahead.
pub fn failure(err: &anyhow::Error) {
    println!("{err:#}");
}
