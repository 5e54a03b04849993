use colored::Color;

pub const SEPARATOR: Color = Color::BrightBlack;
pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const IPV4_ADDR: Color = Color::Cyan;
