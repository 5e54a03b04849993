//! Plain-text rendering of a [`PrimeReport`].
//!
//! ```text
//! ==================================================
//! Prime IP Addresses Between 10.0.0.5 and 10.0.0.10
//! --------------------------------------------------
//! (A Slice From IP Range: 10.0.0.0 - 10.0.0.20)
//! ==================================================
//! 10.0.0.7
//! 10.0.0.9
//! ```
//!
//! Rules are as long as the title in characters. The dashed rule and the
//! subtitle only appear when the report carries a subtitle.

use std::io::{self, Write};

use colored::*;
use primip_common::config::Config;
use primip_core::report::PrimeReport;

use crate::terminal::colors;

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn report<W: Write>(report: &PrimeReport, out: &mut W, colorize: bool) -> io::Result<()> {
    let width: usize = report.title.chars().count();
    let fat_rule: String = paint(&"=".repeat(width), colorize, |s| s.color(colors::SEPARATOR));

    writeln!(out, "{fat_rule}")?;
    writeln!(out, "{}", paint(&report.title, colorize, |s| s.color(colors::PRIMARY).bold()))?;

    if let Some(subtitle) = &report.subtitle {
        let thin_rule = paint(&"-".repeat(width), colorize, |s| s.color(colors::SEPARATOR));
        writeln!(out, "{thin_rule}")?;
        writeln!(out, "{}", paint(subtitle, colorize, |s| s.color(colors::ACCENT)))?;
    }

    writeln!(out, "{fat_rule}")?;

    for prime in &report.primes {
        let address = prime.to_string();
        writeln!(out, "{}", paint(&address, colorize, |s| s.color(colors::IPV4_ADDR)))?;
    }

    Ok(())
}

fn paint(text: &str, colorize: bool, style: fn(ColoredString) -> ColoredString) -> String {
    if colorize {
        style(text.into()).to_string()
    } else {
        text.to_string()
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
