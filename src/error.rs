// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Error taxonomy for registry construction and archive emission.

use std::io;
use std::path::PathBuf;

use crate::logic::emit::EmitState;

/// Failures raised while building the document registry or writing the archive.
///
/// Configuration errors (`DuplicateName`, `InvalidName`) are detected before any
/// file is opened. Everything else is an I/O failure of the current run and
/// leaves no archive at the output path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two registry entries share the same archive path.
    #[error("duplicate document name in registry: {name}")]
    DuplicateName { name: String },

    /// A registry entry name is not a usable relative archive path.
    #[error("invalid document name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The temporary archive could not be created next to the output path.
    #[error("failed to open archive for writing in {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a single entry into the archive failed.
    #[error("failed to write entry {name} into archive")]
    WriteEntry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// Writing the central directory or syncing the archive failed.
    #[error("failed to finalize archive {path:?}")]
    Finalize {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The finished archive could not be moved into place.
    #[error("failed to move finished archive to {path:?}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A progress notice could not be written.
    #[error("failed to report progress")]
    Progress {
        #[source]
        source: io::Error,
    },

    /// `emit` was called on an emitter that already ran.
    #[error("archive emitter already used (state: {state:?})")]
    EmitterReused { state: EmitState },
}

pub type Result<T> = std::result::Result<T, Error>;
