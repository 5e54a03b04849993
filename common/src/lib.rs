//! # Primip Common
//!
//! Value types and shared plumbing used by every crate in the workspace.
//!
//! * **[`network`]**: dotted addresses and the ranges built from them.
//! * **[`error`]**: the error type raised while building and scanning a range.
//! * **[`config`]**: runtime switches passed from the CLI into the core.

pub mod config;
pub mod error;
pub mod network;
