//! # Primip Core
//!
//! The search pipeline, one module per stage:
//!
//! * **[`builder`]**: expands a start and end address into an [`AddressRange`](primip_common::network::range::AddressRange).
//! * **[`primality`]**: trial-division primality test.
//! * **[`filter`]**: keeps the addresses of a slice whose digits form a prime.
//! * **[`report`]**: resolves slice bounds, runs the stages and titles the result.

pub mod builder;
pub mod filter;
pub mod primality;
pub mod report;
