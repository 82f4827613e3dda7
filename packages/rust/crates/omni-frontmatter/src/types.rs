//! Core types shared by the pipelines and the driver.

use std::fmt;
use std::path::PathBuf;

/// Delimiter line that opens and closes a frontmatter block.
pub const HEADER_DELIMITER: &str = "---";

/// Default `created` value when a document carries no date marker.
pub const DEFAULT_CREATED: &str = "2026-01-23";

/// The two note collections handled by the migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Population {
    /// Exam-prep notes with emoji metadata markers in the body.
    Study,
    /// Interview-prep notes whose frontmatter may carry comma-separated tags.
    Interview,
}

impl Population {
    /// Both populations in processing order.
    pub const ALL: [Self; 2] = [Self::Study, Self::Interview];

    /// Tag every document of this population always carries.
    #[must_use]
    pub fn seed_tag(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Interview => "interview",
        }
    }

    /// Default subdirectory name under the notes root.
    #[must_use]
    pub fn default_dir(self) -> &'static str {
        match self {
            Self::Study => "02-study",
            Self::Interview => "04-interview",
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Study => write!(f, "study"),
            Self::Interview => write!(f, "interview"),
        }
    }
}

/// Interview-frequency level, rendered with its Korean label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// 상
    High,
    /// 중
    #[default]
    Medium,
    /// 하
    Low,
}

impl Difficulty {
    /// Label written into the `difficulty:` field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "상",
            Self::Medium => "중",
            Self::Low => "하",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata derived from a study document's inline markers.
///
/// `tags` is never empty and holds no duplicates; the first entry is the
/// population seed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyMetadata {
    tags: Vec<String>,
    /// Creation date, always `YYYY-MM-DD`.
    pub created: String,
    /// Interview-frequency level.
    pub difficulty: Difficulty,
}

impl StudyMetadata {
    /// Create a record seeded with `seed` and the given default date.
    #[must_use]
    pub fn new(seed: &str, created: impl Into<String>) -> Self {
        Self {
            tags: vec![seed.to_string()],
            created: created.into(),
            difficulty: Difficulty::default(),
        }
    }

    /// Append a tag unless it is empty or already present.
    pub fn push_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Default for StudyMetadata {
    fn default() -> Self {
        Self::new(Population::Study.seed_tag(), DEFAULT_CREATED)
    }
}

/// Values used when a header has to be synthesized from nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDefaults {
    /// `created` value for synthesized headers and unmarked documents.
    pub created: String,
    /// Difficulty for synthesized headers.
    pub difficulty: Difficulty,
}

impl Default for HeaderDefaults {
    fn default() -> Self {
        Self {
            created: DEFAULT_CREATED.to_string(),
            difficulty: Difficulty::default(),
        }
    }
}

/// Result of a pure text transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Document must be replaced by `content`.
    Changed {
        /// Full replacement text.
        content: String,
        /// Human-readable reason.
        reason: &'static str,
    },
    /// Document is left as is.
    Unchanged {
        /// Human-readable reason.
        reason: &'static str,
    },
}

/// Terminal classification of one processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// The document was (or, in dry-run mode, would be) rewritten.
    Converted,
    /// Already converted or no change needed.
    Unchanged,
    /// The document could not be processed.
    Failed,
}

/// Per-document result reported by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Document path, relative to the notes root when possible.
    pub path: PathBuf,
    /// Outcome classification.
    pub kind: OutcomeKind,
    /// Human-readable reason.
    pub message: String,
}

impl Outcome {
    /// Create an outcome.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}
