// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Archive writing and progress reporting.

pub mod emit;
pub mod progress;
