use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("PORTR v{}", env!("CARGO_PKG_VERSION"));
    print(&titled_rule(&title, "═", true));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    print(&titled_rule(&msg.to_uppercase(), "─", false));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// Prints `> key....: value` rows with every colon in the same column.
pub fn details(rows: &[(&str, ColoredString)]) {
    let key_width: usize = rows
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(*key))
        .max()
        .unwrap_or(0);

    for (key, value) in rows {
        print(&detail_row(key, value, key_width));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// `fill⟦ title ⟧fill` spanning [`TOTAL_WIDTH`] columns; odd padding goes right.
fn titled_rule(title: &str, fill: &str, bold: bool) -> String {
    let framed = format!("⟦ {title} ⟧");
    let padding: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(framed.as_str()));
    let left: usize = padding / 2;

    let mut framed: ColoredString = framed.color(colors::PRIMARY);
    if bold {
        framed = framed.bold();
    }

    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        framed,
        fill.repeat(padding - left).color(colors::SEPARATOR)
    )
}

fn detail_row(key: &str, value: &ColoredString, key_width: usize) -> String {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(UnicodeWidthStr::width(key)));
    format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
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
