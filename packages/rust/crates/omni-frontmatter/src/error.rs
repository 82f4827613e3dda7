//! Error types for frontmatter migration.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for the migration pipelines and the batch driver.
///
/// Per-document variants are folded into an [`crate::Outcome`] by the driver
/// and never abort a batch. Only [`MigrateError::DirectoryNotFound`] skips a
/// whole phase.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// A population root directory does not exist.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// No top-level `# ` heading anywhere in a study document.
    #[error("no heading found")]
    NoHeading,

    /// Interview document opens a header but has too few lines to hold one.
    #[error("file too short: {lines} lines")]
    TooShort {
        /// Number of lines in the document.
        lines: usize,
    },

    /// Document exceeds the configured size limit.
    #[error("file too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// Document contains binary content (NULL bytes detected).
    #[error("binary file detected")]
    BinaryFile,

    /// Document is not valid UTF-8.
    #[error("UTF-8 decoding error")]
    Encoding,

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file or value.
    #[error("config error: {0}")]
    Config(String),
}
