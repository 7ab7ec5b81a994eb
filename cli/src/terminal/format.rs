use colored::*;
use portr_common::config::Config;
use portr_common::network::outcome::{PortOutcome, PortStatus};
use portr_core::scanner::ScanSummary;

use crate::terminal::colors;

pub const OPEN_TEXT: &str = "Port Open!";
pub const CLOSED_TEXT: &str = "Port Closed...";

pub fn status_text(outcome: &PortOutcome) -> String {
    match outcome.status {
        PortStatus::Open => OPEN_TEXT.to_string(),
        PortStatus::Closed => CLOSED_TEXT.to_string(),
        PortStatus::ResolutionError | PortStatus::SocketError => outcome
            .diagnostic
            .clone()
            .unwrap_or_else(|| outcome.status.to_string()),
    }
}

/// `Port: <port>: <status>`, coloured by status.
pub fn colored_port_line(outcome: &PortOutcome) -> String {
    let status_color: Color = match outcome.status {
        PortStatus::Open => colors::OPEN,
        PortStatus::Closed => colors::CLOSED,
        PortStatus::ResolutionError | PortStatus::SocketError => colors::FAILURE,
    };
    let mut status: ColoredString = status_text(outcome).color(status_color);
    if outcome.is_open() {
        status = status.bold();
    }

    format!(
        "{} {}{} {}",
        "Port:".color(colors::TEXT_DEFAULT),
        outcome.port.to_string().color(colors::PORT),
        ":".color(colors::SEPARATOR),
        status
    )
}

pub fn should_print(outcome: &PortOutcome, cfg: &Config) -> bool {
    if cfg.only_open {
        return outcome.is_open();
    }
    match cfg.quiet {
        0 | 1 => true,
        _ => outcome.status != PortStatus::Closed,
    }
}

pub fn summary_line(summary: &ScanSummary) -> String {
    format!(
        "Scan Complete: {} open, {} closed, {} errors in {:.2}s",
        summary.open,
        summary.closed,
        summary.errors,
        summary.elapsed.as_secs_f64()
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
