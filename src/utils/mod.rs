// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Shared helper utilities.

pub mod hash;

/// Compute the SHA-256 hex digest of a byte slice.
pub use hash::sha256_hex;
