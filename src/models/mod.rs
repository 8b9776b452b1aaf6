// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Domain layer: document entries and the registry that orders them.

pub mod document;
pub mod registry;

pub use registry::DocumentRegistry;
