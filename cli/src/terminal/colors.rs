use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const PORT: Color = Color::BrightWhite;
pub const OPEN: Color = Color::BrightGreen;
pub const CLOSED: Color = Color::BrightBlack;
pub const FAILURE: Color = Color::Yellow;
