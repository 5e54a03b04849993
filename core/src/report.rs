//! Runs a full search and describes it as a [`PrimeReport`].
//!
//! The title names the first and last addresses of the requested slice. Bounds
//! that do not index the range fall back to the first and last address for the
//! title only: the primality scan itself receives the bounds as requested.

use primip_common::config::Config;
use primip_common::error::Result;
use primip_common::network::address::DottedQuad;
use primip_common::network::range::AddressRange;
use tracing::debug;

use crate::builder;
use crate::filter::{self, ProgressCallback};

/// Requested slice of the range, as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceBounds {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl SliceBounds {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeReport {
    pub title: String,
    /// Present when the titled addresses differ from the requested start or end.
    pub subtitle: Option<String>,
    pub first: DottedQuad,
    pub last: DottedQuad,
    pub primes: Vec<DottedQuad>,
}

/// Builds the range `start - end`, scans the requested slice and titles the result.
///
/// Range errors are returned before any scanning happens.
pub fn generate(
    start: &str,
    end: &str,
    bounds: SliceBounds,
    cfg: &Config,
    on_tested: ProgressCallback<'_>,
) -> Result<PrimeReport> {
    let range = builder::build(start, end)?;

    let first = display_address(&range, bounds.start, 0).clone();
    let last = display_address(&range, bounds.end, -1).clone();
    debug!(first = %first, last = %last, "Resolved display bounds");

    let title = format_title(&first, &last);
    let subtitle = (first.to_string() != start || last.to_string() != end)
        .then(|| format_subtitle(start, end));

    let primes = filter::find_primes(&range, bounds.start, bounds.end, cfg, on_tested);

    Ok(PrimeReport {
        title,
        subtitle,
        first,
        last,
        primes,
    })
}

pub fn format_title(first: &DottedQuad, last: &DottedQuad) -> String {
    format!("Prime IP Addresses Between {first} and {last}")
}

pub fn format_subtitle(start: &str, end: &str) -> String {
    format!("(A Slice From IP Range: {start} - {end})")
}

/// The address at `requested`, or at `fallback` when `requested` is absent or out of range.
fn display_address(range: &AddressRange, requested: Option<i64>, fallback: i64) -> &DottedQuad {
    requested
        .and_then(|idx| range.at(idx))
        .or_else(|| range.at(fallback))
        .unwrap_or(range.first())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use primip_common::error::RangeError;

    fn run(start: &str, end: &str, bounds: SliceBounds) -> Result<PrimeReport> {
        generate(start, end, bounds, &Config::default(), None)
    }

    fn to_strings(addrs: &[DottedQuad]) -> Vec<String> {
        addrs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_full_range_has_no_subtitle() {
        let report = run("10.0.0.0", "10.0.0.5", SliceBounds::new(Some(0), None)).unwrap();
        assert_eq!(report.title, "Prime IP Addresses Between 10.0.0.0 and 10.0.0.5");
        assert_eq!(report.subtitle, None);
        assert!(report.primes.is_empty());
    }

    #[test]
    fn test_slice_adds_subtitle() {
        let report = run("10.0.0.0", "10.0.0.20", SliceBounds::new(Some(5), Some(10))).unwrap();
        assert_eq!(report.title, "Prime IP Addresses Between 10.0.0.5 and 10.0.0.10");
        assert_eq!(
            report.subtitle.as_deref(),
            Some("(A Slice From IP Range: 10.0.0.0 - 10.0.0.20)")
        );
        assert_eq!(to_strings(&report.primes), vec!["10.0.0.7", "10.0.0.9"]);
    }

    #[test]
    fn test_out_of_range_bounds_fall_back_for_title() {
        let report = run("10.0.0.0", "10.0.0.20", SliceBounds::new(Some(99), Some(99))).unwrap();
        assert_eq!(report.title, "Prime IP Addresses Between 10.0.0.0 and 10.0.0.20");
        assert_eq!(report.subtitle, None);
        // The scan still starts at the requested index.
        assert!(report.primes.is_empty());
    }

    #[test]
    fn test_negative_bounds_in_title() {
        let report = run("10.0.0.0", "10.0.0.20", SliceBounds::new(Some(-2), Some(-1))).unwrap();
        assert_eq!(report.first.to_string(), "10.0.0.19");
        assert_eq!(report.last.to_string(), "10.0.0.20");
        assert!(report.subtitle.is_some());
        assert_eq!(to_strings(&report.primes), vec!["10.0.0.19"]);
    }

    #[test]
    fn test_unnormalized_input_gets_subtitle() {
        let report = run("010.0.0.0", "10.0.0.5", SliceBounds::default()).unwrap();
        assert_eq!(report.title, "Prime IP Addresses Between 10.0.0.0 and 10.0.0.5");
        assert_eq!(
            report.subtitle.as_deref(),
            Some("(A Slice From IP Range: 010.0.0.0 - 10.0.0.5)")
        );
    }

    #[test]
    fn test_padded_input_gets_subtitle() {
        let report = run(" 10.0.0.0", "10.0.0.5", SliceBounds::new(Some(0), None)).unwrap();
        assert_eq!(report.title, "Prime IP Addresses Between 10.0.0.0 and 10.0.0.5");
        assert_eq!(
            report.subtitle.as_deref(),
            Some("(A Slice From IP Range:  10.0.0.0 - 10.0.0.5)")
        );
    }

    #[test]
    fn test_addresses_wider_than_u64_are_scanned() {
        let report = run(
            "10000000000.10000000000",
            "10000000000.10000000001",
            SliceBounds::new(Some(0), None),
        )
        .unwrap();
        assert_eq!(
            report.title,
            "Prime IP Addresses Between 10000000000.10000000000 and 10000000000.10000000001"
        );
        assert_eq!(report.subtitle, None);
        assert!(report.primes.is_empty());
    }

    #[test]
    fn test_range_errors_propagate() {
        assert!(matches!(
            run("1.2.3", "1.2.3.4", SliceBounds::default()),
            Err(RangeError::MismatchedSegmentCount { .. })
        ));
        assert!(matches!(
            run("5.0", "2.9", SliceBounds::default()),
            Err(RangeError::InvertedSegment { .. })
        ));
    }

    #[test]
    fn test_generate_is_repeatable() {
        let bounds = SliceBounds::new(Some(0), None);
        let first = run("10.0.0.0", "10.0.0.20", bounds).unwrap();
        let second = run("10.0.0.0", "10.0.0.20", bounds).unwrap();
        assert_eq!(first, second);
    }
}
