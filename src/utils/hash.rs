// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Content hashing helper utilities.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of `bytes` and return its lowercase hex digest.
///
/// # Examples
///
/// ```rust,ignore
/// let digest = docpack::utils::sha256_hex(b"abc");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
