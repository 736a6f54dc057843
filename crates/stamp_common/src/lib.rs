//! Shared foundational types for the Stamp fingerprint cache.
//!
//! This crate provides the content-digest algorithms used to fingerprint
//! build inputs, independent of any on-disk cache format.

#![warn(missing_docs)]

pub mod hash;

pub use hash::{HashAlgorithm, ParseAlgorithmError};
