// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Business logic for writing the document registry into a ZIP archive.
//!
//! Responsibilities:
//! - Write every registry entry, in order, as a Deflate-compressed ZIP entry.
//! - Keep entry metadata fixed so repeated runs produce the same archive.
//! - Replace the output file atomically so a failed run never leaves a
//!   truncated archive behind.

use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{Error, Result};
use crate::logic::progress::Progress;
use crate::models::DocumentRegistry;
use crate::utils::sha256_hex;

/// Unix mode stored on every entry.
const ENTRY_PERMISSIONS: u32 = 0o644;

/// Lifecycle of a single emission run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitState {
    Idle,
    Opened,
    WritingEntry { index: usize },
    Finalized,
    Failed,
}

/// What was stored for one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRecord {
    pub name: String,
    pub size: u64,
    pub sha256: String,
}

/// Result of a successful emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitSummary {
    pub output: PathBuf,
    pub entries: Vec<EntryRecord>,
}

/// Single-use writer that turns a [`DocumentRegistry`] into a ZIP at a fixed path.
#[derive(Debug)]
pub struct ArchiveEmitter {
    output: PathBuf,
    state: EmitState,
}

impl ArchiveEmitter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            state: EmitState::Idle,
        }
    }

    pub fn state(&self) -> EmitState {
        self.state
    }

    /// Write every registry entry into a fresh archive at the output path.
    ///
    /// The archive is assembled in a temporary file beside the output and
    /// renamed over it only after the central directory is written and synced,
    /// so an existing file at the output path is fully replaced on success and
    /// untouched on failure. The output's parent directory must already exist.
    ///
    /// `progress` hears about each entry after it is written and about
    /// completion after the rename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmitterReused`] if this emitter already ran, and an I/O
    /// variant naming the failing path or entry otherwise. After any error the
    /// emitter is in [`EmitState::Failed`].
    pub fn emit(
        &mut self,
        registry: &DocumentRegistry,
        progress: &mut dyn Progress,
    ) -> Result<EmitSummary> {
        if self.state != EmitState::Idle {
            return Err(Error::EmitterReused { state: self.state });
        }

        match self.run(registry, progress) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                debug!(
                    "archive emission to {:?} failed in state {:?}: {}",
                    self.output, self.state, err
                );
                self.state = EmitState::Failed;
                Err(err)
            }
        }
    }

    fn run(
        &mut self,
        registry: &DocumentRegistry,
        progress: &mut dyn Progress,
    ) -> Result<EmitSummary> {
        let output = self.output.clone();
        progress
            .on_start(&output, registry.len())
            .map_err(|source| Error::Progress { source })?;

        let dir = output_dir(&output);
        let tmp = create_temp_archive(dir).map_err(|source| Error::Open {
            path: dir.to_path_buf(),
            source,
        })?;
        self.transition(EmitState::Opened);

        let mut zip = ZipWriter::new(tmp);
        let options = entry_options();
        let mut entries = Vec::with_capacity(registry.len());
        for (index, (name, content)) in registry.entries().enumerate() {
            self.transition(EmitState::WritingEntry { index });
            entries.push(write_entry(&mut zip, name, content, options)?);
            progress
                .on_entry_written(name)
                .map_err(|source| Error::Progress { source })?;
        }

        let tmp = zip.finish().map_err(|source| Error::Finalize {
            path: output.clone(),
            source,
        })?;
        tmp.as_file().sync_all().map_err(|err| Error::Finalize {
            path: output.clone(),
            source: err.into(),
        })?;
        tmp.persist(&output).map_err(|err| Error::Persist {
            path: output.clone(),
            source: err.error,
        })?;
        self.transition(EmitState::Finalized);

        progress
            .on_complete(&output)
            .map_err(|source| Error::Progress { source })?;

        Ok(EmitSummary { output, entries })
    }

    fn transition(&mut self, next: EmitState) {
        debug!("{:?}: {:?} -> {:?}", self.output, self.state, next);
        self.state = next;
    }
}

/// Entry options shared by every document: Deflate, fixed timestamp and mode.
fn entry_options() -> FileOptions<'static, ()> {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS)
}

/// Write one document as a complete archive entry.
fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &str,
    options: FileOptions<'static, ()>,
) -> Result<EntryRecord> {
    let bytes = content.as_bytes();
    zip.start_file(name, options)
        .map_err(|source| Error::WriteEntry {
            name: name.to_string(),
            source,
        })?;
    zip.write_all(bytes).map_err(|err| Error::WriteEntry {
        name: name.to_string(),
        source: err.into(),
    })?;
    debug!("wrote entry {} ({} bytes)", name, bytes.len());

    Ok(EntryRecord {
        name: name.to_string(),
        size: bytes.len() as u64,
        sha256: sha256_hex(bytes),
    })
}

/// Directory the temporary archive is created in; same filesystem as `output`.
fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Create the scratch archive in `dir`.
///
/// On Unix the file is requested as 0666 so the process umask decides the final
/// mode, the same as a plain `File::create` would.
fn create_temp_archive(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".docpack-").suffix(".zip.tmp");
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
