//! Picks the prime addresses out of a slice of an [`AddressRange`].
//!
//! Every address is read as the integer formed by its digits (`10.0.0.7` is
//! `10007`) and kept when [`is_prime`] accepts that integer. Results keep the
//! order of the range.

use std::sync::atomic::{AtomicUsize, Ordering};

use num_bigint::BigUint;
use primip_common::config::Config;
use primip_common::network::address::DottedQuad;
use primip_common::network::range::AddressRange;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::primality::is_prime;

/// Called with the number of addresses tested so far.
pub type ProgressCallback<'a> = Option<&'a (dyn Fn(usize) + Send + Sync)>;

/// Returns the primes in `range[slice_start..slice_end]`.
///
/// An absent or out-of-range `slice_end` becomes the index of the last
/// address, so the last address itself lies outside the half-open window.
/// `slice_start` is used as given; negative values count from the end and
/// values past the end give an empty window.
pub fn find_primes(
    range: &AddressRange,
    slice_start: Option<i64>,
    slice_end: Option<i64>,
    cfg: &Config,
    on_tested: ProgressCallback<'_>,
) -> Vec<DottedQuad> {
    let end = resolve_slice_end(range, slice_end);
    let window = range.window(slice_start, Some(end));

    debug!(?slice_start, end, window = window.len(), "Resolved scan window");

    let tested = AtomicUsize::new(0);
    let check = |addr: &DottedQuad| -> bool {
        let prime = digits_are_prime(addr);
        let count = tested.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(callback) = on_tested {
            callback(count);
        }
        prime
    };

    info!(
        addresses = window.len(),
        parallel = cfg.parallel,
        "Testing addresses for primality"
    );

    let primes: Vec<DottedQuad> = if cfg.parallel {
        window.par_iter().filter(|&addr| check(addr)).cloned().collect()
    } else {
        window.iter().filter(|&addr| check(addr)).cloned().collect()
    };

    for prime in &primes {
        trace!(address = %prime, "Prime address");
    }
    info!(primes = primes.len(), "Primality scan complete");

    primes
}

/// Tests the digits of `addr`, staying on `u64` arithmetic whenever the value fits.
pub fn digits_are_prime(addr: &DottedQuad) -> bool {
    let value: BigUint = addr.digits_value();
    match u64::try_from(&value) {
        Ok(small) => is_prime(small),
        Err(_) => is_prime(value),
    }
}

/// `slice_end` if it indexes an address, otherwise the index of the last address.
pub fn resolve_slice_end(range: &AddressRange, slice_end: Option<i64>) -> i64 {
    slice_end
        .filter(|&end| range.contains_index(end))
        .unwrap_or_else(|| i64::try_from(range.len() - 1).unwrap_or(i64::MAX))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
