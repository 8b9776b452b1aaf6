// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Progress notices emitted while an archive is written.
//!
//! Writing an entry and announcing it are separate steps: the emitter finishes
//! an entry first, then hands its name to a [`Progress`] sink. Sinks can print,
//! record, or do nothing without touching archive correctness.

use std::io::{self, Write};
use std::path::Path;

/// Receiver for archive-writing notices.
pub trait Progress {
    /// Called once before the archive is opened.
    fn on_start(&mut self, output: &Path, total: usize) -> io::Result<()> {
        let _ = (output, total);
        Ok(())
    }

    /// Called after `name` has been fully written into the archive.
    fn on_entry_written(&mut self, name: &str) -> io::Result<()>;

    /// Called once the archive is finalized and in place at `output`.
    fn on_complete(&mut self, output: &Path) -> io::Result<()>;
}

/// Prints human-readable progress lines to a writer.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl ConsoleProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    #[cfg(test)]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn on_start(&mut self, output: &Path, _total: usize) -> io::Result<()> {
        writeln!(self.out, "Creating {}...", output.display())
    }

    fn on_entry_written(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, " - Added: {name}")
    }

    fn on_complete(&mut self, output: &Path) -> io::Result<()> {
        writeln!(self.out, "Done! '{}' has been created.", output.display())?;
        self.out.flush()
    }
}

/// Discards every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn on_entry_written(&mut self, _name: &str) -> io::Result<()> {
        Ok(())
    }

    fn on_complete(&mut self, _output: &Path) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{ConsoleProgress, Progress};

    #[test]
    fn console_progress_prints_one_line_per_notice() {
        let mut progress = ConsoleProgress::new(Vec::new());
        let out = Path::new("docs.zip");

        progress.on_start(out, 2).unwrap();
        progress.on_entry_written("README.md").unwrap();
        progress.on_entry_written("01_Requirements.md").unwrap();
        progress.on_complete(out).unwrap();

        let text = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(
            text,
            "Creating docs.zip...\n - Added: README.md\n - Added: 01_Requirements.md\nDone! 'docs.zip' has been created.\n"
        );
    }
}
