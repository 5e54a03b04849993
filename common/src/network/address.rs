//! # Dotted Address Model
//!
//! A [`DottedQuad`] is an IPv4-style address: integer segments joined by `.`.
//! The segment count is not fixed at four, so `"1.2"` and `"1.2.3.4.5"` are
//! both valid as long as a start and end address agree on it.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::{RangeError, Result};

/// An address made of one or more non-negative integer segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DottedQuad {
    segments: Vec<u128>,
}

impl DottedQuad {
    pub fn new(segments: Vec<u128>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[u128] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The address with its separators removed, e.g. `10.0.0.7` becomes `"10007"`.
    pub fn digits(&self) -> String {
        self.segments.iter().map(u128::to_string).collect()
    }

    /// Reads [`Self::digits`] as a single decimal integer of any size.
    pub fn digits_value(&self) -> BigUint {
        BigUint::parse_bytes(self.digits().as_bytes(), 10).unwrap_or_default()
    }
}

impl FromStr for DottedQuad {
    type Err = RangeError;

    /// Splits on `.` and parses every piece as an unsigned integer.
    ///
    /// Surrounding whitespace and leading zeros are accepted and dropped on
    /// display (`" 010.0"` shows as `"10.0"`).
    fn from_str(s: &str) -> Result<Self> {
        let segments = s
            .split('.')
            .map(|piece| {
                piece
                    .trim()
                    .parse::<u128>()
                    .map_err(|_| RangeError::invalid_segment(s, piece))
            })
            .collect::<Result<Vec<u128>>>()?;

        Ok(Self { segments })
    }
}

impl fmt::Display for DottedQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
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
