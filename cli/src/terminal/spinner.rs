use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use primip_common::config::Config;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// Shows the spinner on stderr until [`finish`] is called.
///
/// Nothing is drawn when stderr is not a terminal or `--quiet` is set.
pub fn start(cfg: &Config) {
    let spinner = SPINNER.get_or_init(|| init_spinner(cfg));
    spinner.set_position(0);
    spinner.enable_steady_tick(TICK_INTERVAL);
}

pub fn finish() {
    if let Some(spinner) = SPINNER.get() {
        spinner.finish_and_clear();
    }
}

fn init_spinner(cfg: &Config) -> ProgressBar {
    let target = if cfg.quiet {
        ProgressDrawTarget::hidden()
    } else {
        ProgressDrawTarget::stderr()
    };
    let pb = ProgressBar::with_draw_target(None, target);

    let style = ProgressStyle::with_template(
        "{spinner:.blue} Tested {human_pos} addresses for primality ({elapsed})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_spinner())
    .tick_strings(TICK_STRINGS);

    pb.set_style(style);
    pb
}

pub fn report_scan_progress(count: usize) {
    if let Some(spinner) = SPINNER.get() {
        spinner.set_position(count as u64);
    }
}

/// Routes log lines around the spinner so they never tear its line.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match SPINNER.get() {
            Some(spinner) => spinner.suspend(|| io::stderr().write_all(buf))?,
            None => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
