//! Drives a [`PortProbe`] across the port range of a [`ScanTarget`].
//!
//! Ports are produced lazily in ascending order and fed through a bounded
//! window of in-flight probes. Outcomes are handed to the [`ScanReporter`] in
//! port order whatever order the probes finish in, so output is deterministic.
//! With a window of one, each port is fully probed (socket released included)
//! before the next one starts.

use std::pin::pin;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use portr_common::network::outcome::{PortOutcome, PortStatus};
use portr_common::network::target::ScanTarget;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::engine::PortProbe;
use crate::network::transport::Transport;

/// Receives each outcome as soon as it is next in port order.
pub trait ScanReporter {
    fn report(&mut self, outcome: &PortOutcome);
}

impl<F> ScanReporter for F
where
    F: FnMut(&PortOutcome),
{
    fn report(&mut self, outcome: &PortOutcome) {
        self(outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum number of probes in flight; values below 1 are treated as 1.
    pub concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: u64,
    pub open: u64,
    pub closed: u64,
    pub errors: u64,
    pub elapsed: Duration,
    /// Set when the scan was stopped before the end of the range.
    pub cancelled: bool,
}

impl ScanSummary {
    fn record(&mut self, outcome: &PortOutcome) {
        self.scanned += 1;
        match outcome.status {
            PortStatus::Open => self.open += 1,
            PortStatus::Closed => self.closed += 1,
            PortStatus::ResolutionError | PortStatus::SocketError => self.errors += 1,
        }
    }
}

/// Scans every port of `target` and reports each outcome in ascending order.
///
/// Per-port resolution or socket failures are reported like any other outcome
/// and do not stop the scan. Cancelling `cancel` stops it before the next
/// outcome is reported; probes still in flight are dropped, which releases
/// their sockets.
pub async fn scan_range<T, R>(
    target: &ScanTarget,
    probe: &PortProbe<T>,
    options: ScanOptions,
    reporter: &mut R,
    cancel: &CancellationToken,
) -> ScanSummary
where
    T: Transport,
    R: ScanReporter + ?Sized,
{
    let started: Instant = Instant::now();
    let mut summary = ScanSummary::default();
    let host = &target.host;
    let window: usize = options.concurrency.max(1);

    debug!(
        "scanning {host} ports {}-{} with {window} probe(s) in flight",
        target.start_port, target.end_port
    );

    let mut outcomes = pin!(
        stream::iter(target.ports().to_iter())
            .map(|port| probe.probe(host, port))
            .buffered(window)
    );

    loop {
        let next: Option<PortOutcome> = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Scan cancelled after {} port(s)", summary.scanned);
                summary.cancelled = true;
                break;
            }
            next = outcomes.next() => next,
        };

        let Some(outcome) = next else {
            break;
        };

        debug!(
            "port {} {} after {:?}",
            outcome.port, outcome.status, outcome.elapsed
        );
        summary.record(&outcome);
        reporter.report(&outcome);
    }

    summary.elapsed = started.elapsed();
    summary
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
