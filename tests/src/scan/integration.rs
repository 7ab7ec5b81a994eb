#![cfg(test)]
use std::time::Duration;

use portr_common::network::outcome::{PortOutcome, PortStatus};
use portr_common::network::target::ScanTarget;
use portr_core::engine::PortProbe;
use portr_core::scanner::{self, ScanOptions, ScanSummary};
use tokio_util::sync::CancellationToken;

use crate::util::{self, TrackingTransport};

const TIMEOUT: Option<Duration> = Some(Duration::from_secs(2));

async fn run_scan<T>(
    target: &ScanTarget,
    probe: &PortProbe<T>,
    concurrency: usize,
) -> (Vec<PortOutcome>, ScanSummary)
where
    T: portr_core::network::transport::Transport,
{
    let mut outcomes: Vec<PortOutcome> = Vec::new();
    let mut reporter = |outcome: &PortOutcome| outcomes.push(outcome.clone());
    let summary = scanner::scan_range(
        target,
        probe,
        ScanOptions { concurrency },
        &mut reporter,
        &CancellationToken::new(),
    )
    .await;
    (outcomes, summary)
}

/// Scanning a listening loopback port reports it open, and a released
/// port next to the scan reports closed.
#[tokio::test]
async fn loopback_listener_open_and_released_port_closed() {
    let (_listener, open_port) = util::loopback_listener().await;
    let closed_port = util::released_port().await;
    let probe = PortProbe::new(TIMEOUT);

    let open = probe.probe(&util::localhost(), u32::from(open_port)).await;
    let closed = probe.probe(&util::localhost(), u32::from(closed_port)).await;

    assert_eq!(open.status, PortStatus::Open, "{open:?}");
    assert_eq!(closed.status, PortStatus::Closed, "{closed:?}");
}

#[tokio::test]
async fn closed_classification_is_stable_across_probes() {
    let closed_port = util::released_port().await;
    let probe = PortProbe::new(TIMEOUT);

    for _ in 0..5 {
        let outcome = probe.probe(&util::localhost(), u32::from(closed_port)).await;
        assert_eq!(outcome.status, PortStatus::Closed);
    }
}

#[tokio::test]
async fn validated_arguments_drive_a_full_scan() {
    let (_listener, open_port) = util::loopback_listener().await;
    let start = open_port.saturating_sub(2).max(1);
    let end = open_port.saturating_add(2);

    let args = ["127.0.0.1".to_string(), start.to_string(), end.to_string()];
    let target = ScanTarget::from_args(&args).expect("valid arguments");
    let probe = PortProbe::new(TIMEOUT);

    let (outcomes, summary) = run_scan(&target, &probe, 1).await;

    let ports: Vec<u32> = outcomes.iter().map(|o| o.port).collect();
    let expected: Vec<u32> = (u32::from(start)..=u32::from(end)).collect();
    assert_eq!(ports, expected);
    assert_eq!(summary.scanned, expected.len() as u64);
    assert!(!summary.cancelled);

    let listener_outcome = outcomes
        .iter()
        .find(|o| o.port == u32::from(open_port))
        .expect("listener port was scanned");
    assert_eq!(listener_outcome.status, PortStatus::Open);
}

#[tokio::test]
async fn sequential_probes_release_every_socket() {
    let (_listener, open_port) = util::loopback_listener().await;
    let closed_port = util::released_port().await;
    let probe = PortProbe::with_transport(TrackingTransport::default(), TIMEOUT);

    for _ in 0..10 {
        probe.probe(&util::localhost(), u32::from(open_port)).await;
        probe.probe(&util::localhost(), u32::from(closed_port)).await;
    }

    assert_eq!(probe.transport().sockets_opened(), 20);
    assert_eq!(probe.transport().live_sockets(), 0);
}

#[tokio::test]
async fn concurrent_loopback_scan_is_ordered_and_leak_free() {
    let (_listener, open_port) = util::loopback_listener().await;
    let start = u32::from(open_port.saturating_sub(10).max(1));
    let end = u32::from(open_port.saturating_add(10));

    let target = ScanTarget {
        host: util::localhost(),
        start_port: start,
        end_port: end,
    };
    let probe = PortProbe::with_transport(TrackingTransport::default(), TIMEOUT);

    let (outcomes, summary) = run_scan(&target, &probe, 8).await;

    let ports: Vec<u32> = outcomes.iter().map(|o| o.port).collect();
    assert_eq!(ports, (start..=end).collect::<Vec<u32>>());
    assert!(summary.open >= 1);
    assert_eq!(probe.transport().live_sockets(), 0);
}

#[tokio::test]
async fn ports_beyond_u16_surface_as_resolution_errors() {
    let target = ScanTarget::from_args(&["127.0.0.1", "65536", "65538"]).expect("digits only");
    let probe = PortProbe::with_transport(TrackingTransport::default(), TIMEOUT);

    let (outcomes, summary) = run_scan(&target, &probe, 1).await;

    assert_eq!(outcomes.len(), 3);
    assert!(
        outcomes
            .iter()
            .all(|o| o.status == PortStatus::ResolutionError)
    );
    assert_eq!(summary.errors, 3);
    assert_eq!(probe.transport().sockets_opened(), 0);
}
