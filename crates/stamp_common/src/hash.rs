//! Content-digest algorithms for fingerprinting build inputs.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A content-digest algorithm producing a fixed-length lowercase hex digest.
///
/// Two inputs with the same digest are assumed to have identical content.
/// SHA-1 is the default; change detection has no adversarial threat model,
/// so the algorithm is swappable per snapshot without any format change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5, 128-bit digest (32 hex characters).
    Md5,
    /// SHA-1, 160-bit digest (40 hex characters).
    #[default]
    Sha1,
    /// SHA-256, 256-bit digest (64 hex characters).
    Sha256,
}

impl HashAlgorithm {
    /// Computes the lowercase hex digest of a byte slice.
    pub fn hash_bytes(&self, data: &[u8]) -> String {
        match self {
            Self::Md5 => hex::encode(Md5::digest(data)),
            Self::Sha1 => hex::encode(Sha1::digest(data)),
            Self::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }

    /// Computes the digest of a string's UTF-8 bytes.
    pub fn hash_str(&self, data: &str) -> String {
        self.hash_bytes(data.as_bytes())
    }

    /// Computes one digest over several byte chunks fed in order.
    ///
    /// Equivalent to hashing the concatenation of all chunks, so both a
    /// content change and a reordering produce a different digest.
    pub fn hash_chunks<I, B>(&self, chunks: I) -> String
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        match self {
            Self::Md5 => {
                let mut hasher = Md5::new();
                for chunk in chunks {
                    hasher.update(chunk.as_ref());
                }
                hex::encode(hasher.finalize())
            }
            Self::Sha1 => {
                let mut hasher = Sha1::new();
                for chunk in chunks {
                    hasher.update(chunk.as_ref());
                }
                hex::encode(hasher.finalize())
            }
            Self::Sha256 => {
                let mut hasher = Sha256::new();
                for chunk in chunks {
                    hasher.update(chunk.as_ref());
                }
                hex::encode(hasher.finalize())
            }
        }
    }

    /// Returns the hex digest length this algorithm produces.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        };
        write!(f, "{name}")
    }
}

/// Error type for parsing algorithm names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hash algorithm: '{}'", self.input)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for HashAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}
