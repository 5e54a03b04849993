#![cfg(test)]
use primip_common::config::Config;
use primip_common::error::RangeError;
use primip_common::network::address::DottedQuad;
use primip_core::report::{self, PrimeReport, SliceBounds};
use primip_core::{builder, filter, primality};

fn to_strings(addrs: &[DottedQuad]) -> Vec<String> {
    addrs.iter().map(ToString::to_string).collect()
}

/// Brute-force reference: every address of the window whose digits pass the test.
fn expected_primes(start: &str, end: &str, from: usize, to: usize) -> Vec<String> {
    let range = builder::build(start, end).unwrap();
    range
        .iter()
        .enumerate()
        .filter(|(idx, _)| (from..to).contains(idx))
        .filter(|(_, addr)| primality::is_prime(addr.digits().parse::<u64>().unwrap()))
        .map(|(_, addr)| addr.to_string())
        .collect()
}

/// Full run over a six address range without slice flags.
#[test]
fn pipeline_default_slice() {
    let bounds = SliceBounds::new(Some(0), None);
    let report: PrimeReport =
        report::generate("10.0.0.0", "10.0.0.5", bounds, &Config::default(), None).unwrap();

    assert_eq!(
        report.title,
        "Prime IP Addresses Between 10.0.0.0 and 10.0.0.5"
    );
    assert!(report.subtitle.is_none());

    // 10000, 10001 (73 * 137), 10002, 10003 (7 * 1429), 10004 are all composite.
    assert!(report.primes.is_empty(), "Unexpected primes: {:?}", report.primes);
}

#[test]
fn pipeline_matches_brute_force() {
    let bounds = SliceBounds::new(Some(0), None);
    let report =
        report::generate("10.0.0.0", "10.0.1.40", bounds, &Config::default(), None).unwrap();

    let range_len = 2 * 41;
    assert_eq!(
        to_strings(&report.primes),
        expected_primes("10.0.0.0", "10.0.1.40", 0, range_len - 1)
    );
}

#[test]
fn pipeline_slice_window() {
    let bounds = SliceBounds::new(Some(3), Some(30));
    let report =
        report::generate("10.0.0.0", "10.0.0.40", bounds, &Config::default(), None).unwrap();

    assert_eq!(report.first.to_string(), "10.0.0.3");
    assert_eq!(report.last.to_string(), "10.0.0.30");
    assert_eq!(
        report.subtitle.as_deref(),
        Some("(A Slice From IP Range: 10.0.0.0 - 10.0.0.40)")
    );
    assert_eq!(
        to_strings(&report.primes),
        expected_primes("10.0.0.0", "10.0.0.40", 3, 30)
    );
}

#[test]
fn pipeline_odometer_range() {
    let bounds = SliceBounds::new(None, Some(-1));
    let report = report::generate("1.8", "2.9", bounds, &Config::default(), None).unwrap();

    // 18 and 28 are composite, 19 is prime and 29 sits outside [0, -1).
    assert_eq!(to_strings(&report.primes), vec!["1.9"]);
}

#[test]
fn pipeline_parallel_is_identical() {
    let bounds = SliceBounds::new(Some(0), None);
    let sequential =
        report::generate("10.0.0.0", "10.0.2.50", bounds, &Config::default(), None).unwrap();
    let parallel_cfg = Config {
        parallel: true,
        ..Config::default()
    };
    let parallel =
        report::generate("10.0.0.0", "10.0.2.50", bounds, &parallel_cfg, None).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn pipeline_is_idempotent() {
    let bounds = SliceBounds::new(Some(2), Some(-3));
    let first = report::generate("10.0.0.0", "10.0.0.60", bounds, &Config::default(), None);
    let second = report::generate("10.0.0.0", "10.0.0.60", bounds, &Config::default(), None);
    assert_eq!(first, second);
}

#[test]
fn pipeline_handles_digits_wider_than_u64() {
    let bounds = SliceBounds::new(Some(0), None);
    let report = report::generate(
        "10000000000.10000000000",
        "10000000000.10000000001",
        bounds,
        &Config::default(),
        None,
    )
    .unwrap();

    // 1000000000010000000000 is even; 1000000000010000000001 is outside [0, len - 1).
    assert!(report.primes.is_empty());
    assert!(report.subtitle.is_none());
}

#[test]
fn pipeline_rejects_invalid_ranges() {
    let bounds = SliceBounds::default();
    let cfg = Config::default();

    assert!(matches!(
        report::generate("1.2.3", "1.2.3.4", bounds, &cfg, None),
        Err(RangeError::MismatchedSegmentCount { .. })
    ));
    assert!(matches!(
        report::generate("5.0", "2.9", bounds, &cfg, None),
        Err(RangeError::InvertedSegment { .. })
    ));
    assert!(matches!(
        report::generate("10.0.0.x", "10.0.0.9", bounds, &cfg, None),
        Err(RangeError::InvalidSegment { .. })
    ));
}

#[test]
fn filter_spec_example() {
    let range = builder::build("10.0.0.2", "10.0.0.4").unwrap();
    let primes = filter::find_primes(&range, Some(0), None, &Config::default(), None);

    assert_eq!(
        to_strings(range.as_slice()),
        vec!["10.0.0.2", "10.0.0.3", "10.0.0.4"]
    );
    assert!(primes.iter().all(|p| range.iter().any(|a| a == p)));
    assert!(primes.is_empty());
}
