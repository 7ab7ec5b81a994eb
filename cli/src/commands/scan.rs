use colored::*;
use portr_common::config::Config;
use portr_common::error::ValidationError;
use portr_common::network::outcome::PortOutcome;
use portr_common::network::target::ScanTarget;
use portr_core::engine::PortProbe;
use portr_core::scanner::{self, ScanOptions, ScanReporter, ScanSummary};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span, info_span, warn};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

/// Exit codes of the `portr` binary.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    /// Bad arguments, or a failure before scanning started.
    pub const ERROR: u8 = 1;
    /// The scan was stopped with Ctrl-C.
    pub const INTERRUPTED: u8 = 130;
}

pub async fn scan(args: &[&str], cfg: &Config) -> u8 {
    let target: ScanTarget = match ScanTarget::from_args(args) {
        Ok(target) => target,
        Err(e) => {
            report_invalid_input(&e);
            return exit_codes::ERROR;
        }
    };

    print::banner(cfg.no_banner, cfg.quiet);
    print::header("scan details", cfg.quiet);
    print_scan_details(&target, cfg);
    print::header("starting scanner", cfg.quiet);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let signal_listener = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let span: Span = if cfg.quiet == 0 {
        info_span!("scan", indicatif.pb_show = true)
    } else {
        info_span!("scan")
    };
    spinner::start_scan_progress(&span, target.ports().len());

    let probe = PortProbe::new(cfg.connect_timeout);
    let options = ScanOptions {
        concurrency: cfg.concurrency,
    };
    let mut reporter = TerminalReporter::new(cfg, span.clone());

    let summary: ScanSummary = scanner::scan_range(&target, &probe, options, &mut reporter, &cancel)
        .instrument(span)
        .await;
    signal_listener.abort();

    scan_ends(&target, &summary, cfg);

    if summary.cancelled {
        exit_codes::INTERRUPTED
    } else {
        exit_codes::SUCCESS
    }
}

/// Prints each outcome as a `Port: <port>: <status>` line and advances the progress bar.
struct TerminalReporter<'a> {
    cfg: &'a Config,
    span: Span,
    open: u64,
}

impl<'a> TerminalReporter<'a> {
    fn new(cfg: &'a Config, span: Span) -> Self {
        Self { cfg, span, open: 0 }
    }
}

impl ScanReporter for TerminalReporter<'_> {
    fn report(&mut self, outcome: &PortOutcome) {
        if outcome.is_open() {
            self.open += 1;
        }
        if format::should_print(outcome, self.cfg) {
            print::print(&format::colored_port_line(outcome));
        }
        spinner::report_scan_progress(&self.span, outcome.port, self.open);
    }
}

fn report_invalid_input(err: &ValidationError) {
    match err {
        ValidationError::NotEnoughArgs => print::print(&usage()),
        ValidationError::InvalidAddress { fault, .. } => {
            print::print(&fault.to_string());
            print::print(&err.to_string());
        }
        ValidationError::NonNumericPort { .. } | ValidationError::PortRangeInverted { .. } => {
            print::print(&err.to_string())
        }
    }
}

fn usage() -> String {
    let program: String = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());
    format!("Usage: {program} ip_address start_port end_port")
}

fn print_scan_details(target: &ScanTarget, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let timeout: String = match cfg.connect_timeout {
        Some(limit) => format!("{}ms", limit.as_millis()),
        None => "OS default".to_string(),
    };
    let ports: String = format!(
        "{}-{} ({} ports)",
        target.start_port,
        target.end_port,
        target.ports().len()
    );

    print::details(&[
        ("Target", target.host.to_string().color(colors::ACCENT)),
        ("Ports", ports.color(colors::TEXT_DEFAULT)),
        ("Timeout", timeout.color(colors::TEXT_DEFAULT)),
        ("Concurrency", cfg.concurrency.to_string().color(colors::TEXT_DEFAULT)),
    ]);
}

fn scan_ends(target: &ScanTarget, summary: &ScanSummary, cfg: &Config) {
    if summary.cancelled {
        warn!(
            "Scan interrupted: {} of {} ports scanned",
            summary.scanned,
            target.ports().len()
        );
    }

    if cfg.quiet > 0 {
        return;
    }

    mprint!();
    print::fat_separator();
    print::centerln(&format::summary_line(summary).color(colors::TEXT_DEFAULT).to_string());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
