//! omni-frontmatter - Batch frontmatter migration for markdown note vaults
//!
//! Normalizes loosely structured metadata in two note collections into a
//! YAML frontmatter block at the top of each document:
//!
//! - **study**: emoji markers in the body (`🏷️기술 카테고리`, `💡핵심키워드`,
//!   `💼 면접 빈출도`, date lines) become `tags`, `created` and `difficulty`.
//! - **interview**: a comma-separated `tags: a, b` line becomes a YAML list;
//!   documents without frontmatter get a default block.
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-frontmatter/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # MigrateError
//! ├── types.rs      # Population, Difficulty, StudyMetadata, Rewrite, Outcome
//! ├── patterns.rs   # Marker regexes + ordered difficulty rules
//! ├── extractor.rs  # Study metadata extraction
//! ├── writer.rs     # Study frontmatter writer
//! ├── normalizer.rs # Interview tag-shape normalizer
//! ├── document.rs   # Whole-file read/write
//! ├── config.rs     # MigrateConfig + YAML overlay
//! ├── report.rs     # Tallies and report lines
//! └── driver.rs     # BatchDriver
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_frontmatter::{BatchDriver, MigrateConfig};
//!
//! let driver = BatchDriver::new(MigrateConfig::new("/notes/code-notes"));
//! let report = driver.run()?;
//! println!("{} converted", report.tally().converted);
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod config;
mod document;
mod driver;
mod error;
mod extractor;
mod normalizer;
mod patterns;
mod report;
mod types;
mod writer;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use config::{ConfigOverlay, MigrateConfig, load_config_file};
pub use document::{DEFAULT_MAX_BYTES, is_binary, read_document, write_document};
pub use driver::{BatchDriver, collect_documents, transform};
pub use error::MigrateError;
pub use extractor::extract_study_metadata;
pub use normalizer::{
    REASON_HEADER_ADDED, REASON_NO_CHANGE, REASON_TAGS_FIXED, TAG_SCAN_LINES,
    default_interview_header, normalize_interview_tags,
};
pub use patterns::{DIFFICULTY_RULES, resolve_difficulty};
pub use report::{PhaseReport, PhaseSummary, RunReport, RunSummary, Tally};
pub use types::{
    DEFAULT_CREATED, Difficulty, HEADER_DELIMITER, HeaderDefaults, Outcome, OutcomeKind,
    Population, Rewrite, StudyMetadata,
};
pub use writer::{
    REASON_ALREADY_CONVERTED, REASON_CONVERTED, convert_study_document, has_frontmatter,
    is_top_level_heading, render_frontmatter,
};
