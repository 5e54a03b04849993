//! Errors raised while building an address range.
//!
//! Slice indices never produce an error: out-of-range values are replaced by
//! defaults where they are used.

use thiserror::Error;

/// Result type alias for range operations
pub type Result<T> = std::result::Result<T, RangeError>;

/// Errors that can occur while building or scanning an address range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Start and end split into a different number of segments
    #[error("The IP addresses passed to `start` ({start}) and `end` ({end}) represent an invalid IP range")]
    MismatchedSegmentCount { start: String, end: String },

    /// A start segment is higher than the matching end segment
    #[error(
        "A segment ({start_segment}) passed to `start` ({start}) is higher than its corresponding segment ({end_segment}) passed to `end` ({end})"
    )]
    InvertedSegment {
        start: String,
        end: String,
        start_segment: u128,
        end_segment: u128,
    },

    /// A segment is not a non-negative integer
    #[error("Segment '{segment}' of address '{address}' is not a non-negative integer")]
    InvalidSegment { address: String, segment: String },

    /// The cartesian product cannot be held in memory at all
    #[error("The range {start} - {end} contains more addresses than can be enumerated")]
    RangeTooLarge { start: String, end: String },
}

impl RangeError {
    pub fn mismatched_segment_count(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::MismatchedSegmentCount {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn inverted_segment(
        start: impl Into<String>,
        end: impl Into<String>,
        start_segment: u128,
        end_segment: u128,
    ) -> Self {
        Self::InvertedSegment {
            start: start.into(),
            end: end.into(),
            start_segment,
            end_segment,
        }
    }

    pub fn invalid_segment(address: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::InvalidSegment {
            address: address.into(),
            segment: segment.into(),
        }
    }

    pub fn range_too_large(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::RangeTooLarge {
            start: start.into(),
            end: end.into(),
        }
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
