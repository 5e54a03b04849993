//! Expands a pair of dotted addresses into every address between them.
//!
//! Each segment position contributes the inclusive interval `[start_i, end_i]`
//! and the range is the cartesian product of those intervals, walked like an
//! odometer: the rightmost segment advances fastest and rolls the one to its
//! left when it wraps.

use primip_common::error::{RangeError, Result};
use primip_common::network::address::DottedQuad;
use primip_common::network::range::AddressRange;
use tracing::debug;

/// Builds the range `start - end`.
///
/// Fails if the addresses have a different number of segments, if any start
/// segment is above its end segment, or if a segment is not an integer.
/// The size of the range is not capped.
pub fn build(start: &str, end: &str) -> Result<AddressRange> {
    if start.split('.').count() != end.split('.').count() {
        return Err(RangeError::mismatched_segment_count(start, end));
    }

    let start_addr: DottedQuad = start.parse()?;
    let end_addr: DottedQuad = end.parse()?;

    let lows = start_addr.segments().to_vec();
    let highs = end_addr.segments().to_vec();

    if let Some((low, high)) = lows.iter().zip(&highs).find(|(low, high)| low > high) {
        return Err(RangeError::inverted_segment(start, end, *low, *high));
    }

    let total = range_size(&lows, &highs).ok_or_else(|| RangeError::range_too_large(start, end))?;

    let mut addresses: Vec<DottedQuad> = Vec::new();
    addresses
        .try_reserve_exact(total)
        .map_err(|_| RangeError::range_too_large(start, end))?;
    addresses.extend(Odometer::new(lows, highs).map(DottedQuad::new));

    debug!(start, end, count = addresses.len(), "Built address range");

    AddressRange::new(addresses).ok_or_else(|| RangeError::range_too_large(start, end))
}

/// Product of the interval widths, or `None` if it does not fit in a `usize`.
pub fn range_size(lows: &[u128], highs: &[u128]) -> Option<usize> {
    lows.iter().zip(highs).try_fold(1usize, |acc, (low, high)| {
        let width = high.checked_sub(*low)?.checked_add(1)?;
        acc.checked_mul(usize::try_from(width).ok()?)
    })
}

/// Yields every segment tuple between `lows` and `highs` in odometer order.
struct Odometer {
    lows: Vec<u128>,
    highs: Vec<u128>,
    current: Option<Vec<u128>>,
}

impl Odometer {
    fn new(lows: Vec<u128>, highs: Vec<u128>) -> Self {
        let current = Some(lows.clone());
        Self {
            lows,
            highs,
            current,
        }
    }

    fn advance(&self, mut segments: Vec<u128>) -> Option<Vec<u128>> {
        for pos in (0..segments.len()).rev() {
            if segments[pos] < self.highs[pos] {
                segments[pos] += 1;
                return Some(segments);
            }
            segments[pos] = self.lows[pos];
        }
        None
    }
}

impl Iterator for Odometer {
    type Item = Vec<u128>;

    fn next(&mut self) -> Option<Self::Item> {
        let segments = self.current.take()?;
        self.current = self.advance(segments.clone());
        Some(segments)
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
