//! # Address Models
//!
//! * [`address::DottedQuad`]: integer segments joined by periods.
//! * [`range::AddressRange`]: the ordered, non-empty list produced from a start and end address.

pub mod address;
pub mod range;
