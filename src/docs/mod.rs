// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The docpack Authors

//! Static document table for the Local Sync Board design docs.
//!
//! Each document is a compile-time constant in its own file. Documents that show
//! example payloads splice the fence token in with `concat!`, so the resolved
//! text is fixed before the program runs.

/// Fenced-code-block delimiter, usable inside `concat!`.
///
/// Document sources never spell the fence out literally; they splice this in.
macro_rules! fence {
    () => {
        "```"
    };
}

mod basic_design;
mod data_model;
mod readme;
mod requirements;
mod tech_architecture;

/// Resolved value of the fence token, for checking rendered documents.
#[cfg(test)]
pub const FENCE: &str = fence!();

/// File name used when no output path is given.
pub const DEFAULT_ARCHIVE_NAME: &str = "Local_Sync_Board_Cloud_Docs.zip";

/// Documents in archive order as `(entry name, content)`.
pub const DOCUMENTS: &[(&str, &str)] = &[
    ("README.md", readme::CONTENT),
    ("01_Requirements.md", requirements::CONTENT),
    ("02_Basic_Design.md", basic_design::CONTENT),
    ("03_Data_Model.md", data_model::CONTENT),
    ("04_Tech_Architecture.md", tech_architecture::CONTENT),
];
