use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use primip_common::config::Config;
use primip_core::report::{self, PrimeReport, SliceBounds};
use tracing::info_span;

use crate::commands::CommandLine;
use crate::terminal::{print, spinner};

pub fn primes(args: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("primes", start = %args.ip_range_start, end = %args.ip_range_end);
    let _guard = span.enter();

    let bounds = SliceBounds::new(Some(args.slice_start), args.slice_end);

    spinner::start(cfg);
    let result = report::generate(
        &args.ip_range_start,
        &args.ip_range_end,
        bounds,
        cfg,
        Some(&spinner::report_scan_progress),
    );
    spinner::finish();

    let report: PrimeReport = result.with_context(|| {
        format!(
            "Unable to search {} - {} for prime addresses",
            args.ip_range_start, args.ip_range_end
        )
    })?;

    let stdout = io::stdout();
    let colorize = !cfg.no_color && stdout.is_terminal();
    let mut out = stdout.lock();
    print::report(&report, &mut out, colorize).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}
