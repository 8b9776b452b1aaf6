// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Document entry domain model and name validation (I/O-agnostic).

use crate::error::{Error, Result};

/// One named text document destined for the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentEntry {
    name: String,
    content: String,
}

impl DocumentEntry {
    /// Create an entry after checking that `name` is a usable archive path.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            content: content.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Reject names that are not plain relative ZIP paths.
///
/// Absolute paths, `..` traversal and Windows separators are refused.
fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("name is empty");
    }
    if name.starts_with('/') {
        return invalid("name must be relative");
    }
    if name.contains('\\') {
        return invalid("name must use '/' as separator");
    }
    if name
        .split('/')
        .any(|part| part.is_empty() || part == "." || part == "..")
    {
        return invalid("name contains an empty, '.' or '..' component");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::DocumentEntry;
    use crate::error::Error;

    #[test]
    fn new_keeps_name_and_content() {
        let entry = DocumentEntry::new("docs/notes.md", "# Notes\n").unwrap();

        assert_eq!(entry.name(), "docs/notes.md");
        assert_eq!(entry.content(), "# Notes\n");
    }

    // Absolute paths and traversal would escape the extraction directory.
    #[test]
    fn new_rejects_escaping_names() {
        for name in ["", "/etc/passwd", "../up.md", "a/../b.md", "a//b.md", "./a.md"] {
            let err = DocumentEntry::new(name, "x").unwrap_err();
            assert!(
                matches!(err, Error::InvalidName { .. }),
                "{name:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn new_rejects_backslash_separators() {
        let err = DocumentEntry::new("docs\\notes.md", "x").unwrap_err();

        assert!(matches!(err, Error::InvalidName { reason, .. } if reason.contains("'/'")));
    }
}
