//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur during cache operations.
///
/// Validation is fail-safe: a malformed or stale cache file resolves to
/// "invalid" rather than an error. Only genuine I/O failures surface here,
/// and they are passed through to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while reading a tracked file or touching the
    /// cache file itself.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
