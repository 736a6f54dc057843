//! On-disk fingerprint cache for skipping unchanged build steps.
//!
//! A [`Snapshot`] accumulates key/value fingerprints (literal strings or file
//! content digests) for one build invocation. Validating the snapshot against
//! the cache file left by the previous successful run decides whether the
//! expensive step can be skipped; after a rebuild, writing the snapshot makes
//! it the new baseline. Validation is fail-safe: a missing, stale, or
//! corrupted cache file reads as "invalid" and triggers a rebuild, never an
//! error.

#![warn(missing_docs)]

pub mod error;
pub mod hasher;
pub mod snapshot;
pub mod validate;

pub use error::CacheError;
pub use snapshot::Snapshot;
pub use stamp_common::HashAlgorithm;
