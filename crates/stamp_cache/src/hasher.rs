//! File-content hashing for snapshot fingerprints.
//!
//! Wraps the pure digest operations from `stamp_common` with the file I/O
//! needed to fingerprint build inputs on disk. Read failures carry the
//! offending path.

use std::path::{Path, PathBuf};

use stamp_common::HashAlgorithm;

use crate::error::CacheError;

/// Computes the content digest of a single file.
///
/// Reads the file and returns the lowercase hex digest of its bytes under
/// `algorithm`. Pure function of the file content.
pub fn hash_file(algorithm: HashAlgorithm, path: &Path) -> Result<String, CacheError> {
    let content = std::fs::read(path).map_err(|e| CacheError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(algorithm.hash_bytes(&content))
}

/// Computes one aggregate digest over several files.
///
/// The digest covers every file's bytes in the order given, so a change in
/// any file, or a reordering of the list, produces a different fingerprint.
/// Fails on the first unreadable file.
pub fn hash_files(algorithm: HashAlgorithm, paths: &[PathBuf]) -> Result<String, CacheError> {
    let mut contents = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = std::fs::read(path).map_err(|e| CacheError::Io {
            path: path.clone(),
            source: e,
        })?;
        contents.push(bytes);
    }
    Ok(algorithm.hash_chunks(&contents))
}
