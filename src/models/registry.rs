// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Ordered, duplicate-free set of documents to package.

use std::collections::HashSet;

use crate::docs::DOCUMENTS;
use crate::error::{Error, Result};
use crate::models::document::DocumentEntry;

/// Documents in write order, with names guaranteed unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRegistry {
    entries: Vec<DocumentEntry>,
}

impl DocumentRegistry {
    /// Build a registry from already-validated entries, rejecting duplicate names.
    ///
    /// Insertion order is preserved and becomes the archive entry order.
    pub fn new(entries: Vec<DocumentEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name()) {
                return Err(Error::DuplicateName {
                    name: entry.name().to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a registry from a static `(name, content)` table.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self> {
        let entries = table
            .iter()
            .map(|(name, content)| DocumentEntry::new(*name, *content))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// The built-in Local Sync Board document set.
    pub fn builtin() -> Result<Self> {
        Self::from_table(DOCUMENTS)
    }

    /// Ordered `(name, content)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.name(), e.content()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .map(DocumentEntry::content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
