use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("#>-")
}

/// Turns `span` into a progress bar over `total` ports.
///
/// Only has a visible effect on spans created with `indicatif.pb_show`; the
/// bar appears the first time the span is entered.
pub fn start_scan_progress(span: &Span, total: u64) {
    span.pb_set_style(&scan_style());
    span.pb_set_length(total);
    span.pb_set_message("starting...");
}

pub fn report_scan_progress(span: &Span, port: u32, open_so_far: u64) {
    span.pb_inc(1);
    span.pb_set_message(&format!(
        "port {} ({} open so far)",
        port.to_string().bold(),
        open_so_far.to_string().green().bold()
    ));
}
