//! The per-run fingerprint snapshot: builder, serializer, and validator.
//!
//! A snapshot is created fresh for each build invocation, populated with the
//! fingerprints of everything the step depends on, and then either compared
//! against the previous run's cache file (skip/rebuild decision) or written
//! out to become the new baseline after a successful rebuild.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use stamp_common::HashAlgorithm;

use crate::error::CacheError;
use crate::hasher;
use crate::validate;

/// An insertion-ordered set of key → fingerprint pairs for one build step.
///
/// Values are either literal strings (flags, versions) or content digests of
/// tracked files. Keys are unique; re-putting a key replaces its value but
/// keeps the position it was first inserted at, so serialization stays
/// deterministic across runs with identical inputs. The optional comment is
/// purely documentary: it is written to the cache file but never read back
/// and never participates in validity.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Digest algorithm applied by `put_file` and `put_files`.
    algorithm: HashAlgorithm,

    /// Keys in first-insertion order.
    order: Vec<String>,

    /// Key → value index; the unordered side used for validation.
    entries: HashMap<String, String>,

    /// Optional comment block written ahead of the data lines.
    comment: Option<String>,
}

impl Snapshot {
    /// Creates an empty snapshot using the default algorithm (SHA-1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty snapshot that fingerprints files with `algorithm`.
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Returns the algorithm used to fingerprint files.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Sets the comment block, or clears it when `lines` is empty.
    ///
    /// The comment is excluded from equality comparisons.
    pub fn set_comment<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect();
        self.comment = if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        };
        self
    }

    /// Stores a literal value under `key`, overwriting any prior value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, value.into());
        self
    }

    /// Stores the content digest of the file at `path` under `key`.
    ///
    /// Propagates the I/O error if the path is unreadable.
    pub fn put_file(
        &mut self,
        key: impl Into<String>,
        path: &Path,
    ) -> Result<&mut Self, CacheError> {
        let digest = hasher::hash_file(self.algorithm, path)?;
        Ok(self.put(key, digest))
    }

    /// Stores one aggregate digest over several files under `key`.
    ///
    /// The digest depends on every file's bytes and on the list order.
    pub fn put_files(
        &mut self,
        key: impl Into<String>,
        paths: &[PathBuf],
    ) -> Result<&mut Self, CacheError> {
        let digest = hasher::hash_files(self.algorithm, paths)?;
        Ok(self.put(key, digest))
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.entries[k].as_str()))
    }

    /// Serializes the snapshot to `target`, overwriting any existing file.
    ///
    /// Writes the comment block (if set) followed by one blank line, then one
    /// `key: value` line per entry in insertion order, as UTF-8 text.
    pub fn write(&self, target: &Path) -> Result<(), CacheError> {
        let mut buf = String::new();
        if let Some(comment) = &self.comment {
            buf.push_str(comment);
            buf.push_str("\n\n");
        }
        for key in &self.order {
            buf.push_str(key);
            buf.push_str(": ");
            buf.push_str(&self.entries[key]);
            buf.push('\n');
        }
        std::fs::write(target, buf.as_bytes()).map_err(|e| CacheError::Io {
            path: target.to_path_buf(),
            source: e,
        })
    }

    /// Checks whether the cache file at `target` matches this snapshot.
    ///
    /// Returns `Ok(false)` when the file does not exist or its data lines do
    /// not equal this snapshot's entries exactly (same keys, same values).
    /// Entry order and comment content never affect the result; a malformed
    /// or stale file is simply invalid. Errors only on a genuine read
    /// failure.
    pub fn is_valid(&self, target: &Path) -> Result<bool, CacheError> {
        if !target.exists() {
            return Ok(false);
        }
        let existing = validate::read_entries(target)?;
        Ok(existing == self.entries)
    }
}
