//! # Address Range Model
//!
//! An [`AddressRange`] holds every address between a start and end address in
//! odometer order: the rightmost segment advances fastest. This is not numeric
//! IP ordering once segment ranges differ in width (`1.9` is followed by `2.8`
//! in the range `1.8 - 2.9`), and the order is kept as generated.
//!
//! Indexing and slicing follow the same rules as Python sequences, which is
//! what the slice flags on the command line are expressed in:
//! negative indices count from the end, slices clamp instead of failing.

use std::ops::Range;

use crate::network::address::DottedQuad;

/// A non-empty, ordered list of addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRange {
    addresses: Vec<DottedQuad>,
}

impl AddressRange {
    /// Returns `None` when `addresses` is empty.
    pub fn new(addresses: Vec<DottedQuad>) -> Option<Self> {
        if addresses.is_empty() {
            return None;
        }
        Some(Self { addresses })
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn first(&self) -> &DottedQuad {
        &self.addresses[0]
    }

    pub fn last(&self) -> &DottedQuad {
        &self.addresses[self.addresses.len() - 1]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DottedQuad> + ExactSizeIterator {
        self.addresses.iter()
    }

    pub fn as_slice(&self) -> &[DottedQuad] {
        &self.addresses
    }

    /// Index lookup where `-1` is the last address.
    pub fn at(&self, index: i64) -> Option<&DottedQuad> {
        resolve_index(self.len(), index).map(|idx| &self.addresses[idx])
    }

    /// Whether `index` addresses an element, negative indices included.
    pub fn contains_index(&self, index: i64) -> bool {
        resolve_index(self.len(), index).is_some()
    }

    /// Half-open `[start, end)` sub-slice with clamped bounds.
    ///
    /// A missing `start` means the beginning and a missing `end` means the end.
    pub fn window(&self, start: Option<i64>, end: Option<i64>) -> &[DottedQuad] {
        &self.addresses[slice_bounds(self.len(), start, end)]
    }
}

impl<'a> IntoIterator for &'a AddressRange {
    type Item = &'a DottedQuad;
    type IntoIter = std::slice::Iter<'a, DottedQuad>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}

/// Maps a possibly negative index onto `0..len`.
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let idx = if index < 0 { index.checked_add(len)? } else { index };

    if (0..len).contains(&idx) {
        usize::try_from(idx).ok()
    } else {
        None
    }
}

/// Converts optional, possibly negative slice bounds into a valid range over `0..len`.
pub fn slice_bounds(len: usize, start: Option<i64>, end: Option<i64>) -> Range<usize> {
    let start = start.map_or(0, |s| clamp_bound(len, s));
    let end = end.map_or(len, |e| clamp_bound(len, e));

    if start >= end {
        return start..start;
    }
    start..end
}

fn clamp_bound(len: usize, bound: i64) -> usize {
    if bound < 0 {
        let back = usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(bound).map_or(len, |b| b.min(len))
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
