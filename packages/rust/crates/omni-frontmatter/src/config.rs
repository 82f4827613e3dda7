//! Migration configuration.
//!
//! Built from defaults, then an optional YAML overlay file, then CLI values.
//! Merge precedence is overlay over base.
//!
//! ```yaml
//! base_path: /notes/code-notes
//! study_dir: 02-study
//! interview_dir: 04-interview
//! extension: md
//! default_created: 2026-01-23
//! max_bytes: 10485760
//! dry_run: false
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::document::DEFAULT_MAX_BYTES;
use crate::error::MigrateError;
use crate::types::{HeaderDefaults, Population};

const DEFAULT_EXTENSION: &str = "md";

/// Resolved configuration handed to the batch driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfig {
    /// Notes root; population directories are resolved against it.
    pub base_path: PathBuf,
    /// Study population directory, relative to `base_path`.
    pub study_dir: PathBuf,
    /// Interview population directory, relative to `base_path`.
    pub interview_dir: PathBuf,
    /// Document file extension, without the dot.
    pub extension: String,
    /// Header defaults for unmarked and synthesized headers.
    pub defaults: HeaderDefaults,
    /// Per-document read limit in bytes.
    pub max_bytes: u64,
    /// Report outcomes without writing any document.
    pub dry_run: bool,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            study_dir: PathBuf::from(Population::Study.default_dir()),
            interview_dir: PathBuf::from(Population::Interview.default_dir()),
            extension: DEFAULT_EXTENSION.to_string(),
            defaults: HeaderDefaults::default(),
            max_bytes: DEFAULT_MAX_BYTES,
            dry_run: false,
        }
    }
}

impl MigrateConfig {
    /// Create a default configuration rooted at `base_path`.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Absolute-or-relative root directory of a population.
    #[must_use]
    pub fn population_root(&self, population: Population) -> PathBuf {
        let dir = match population {
            Population::Study => &self.study_dir,
            Population::Interview => &self.interview_dir,
        };
        self.base_path.join(dir)
    }

    /// Apply a file overlay; fields present in `overlay` win.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Config`] when `default_created` is not a
    /// valid `YYYY-MM-DD` date.
    pub fn merge(self, overlay: ConfigOverlay) -> Result<Self, MigrateError> {
        let created = match overlay.default_created {
            Some(raw) => validate_date(&raw)?,
            None => self.defaults.created,
        };
        Ok(Self {
            base_path: overlay.base_path.unwrap_or(self.base_path),
            study_dir: overlay.study_dir.unwrap_or(self.study_dir),
            interview_dir: overlay.interview_dir.unwrap_or(self.interview_dir),
            extension: overlay
                .extension
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(self.extension),
            defaults: HeaderDefaults {
                created,
                difficulty: self.defaults.difficulty,
            },
            max_bytes: overlay.max_bytes.unwrap_or(self.max_bytes),
            dry_run: overlay.dry_run.unwrap_or(self.dry_run),
        })
    }
}

/// Optional fields read from a YAML config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverlay {
    /// Notes root.
    pub base_path: Option<PathBuf>,
    /// Study directory name.
    pub study_dir: Option<PathBuf>,
    /// Interview directory name.
    pub interview_dir: Option<PathBuf>,
    /// Document extension.
    pub extension: Option<String>,
    /// Default `created` date.
    pub default_created: Option<String>,
    /// Per-document read limit in bytes.
    pub max_bytes: Option<u64>,
    /// Dry-run flag.
    pub dry_run: Option<bool>,
}

impl ConfigOverlay {
    /// Parse an overlay from YAML text. An empty document yields no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::Config`] on invalid YAML or unknown keys.
    pub fn from_yaml(raw: &str) -> Result<Self, MigrateError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|error| MigrateError::Config(error.to_string()))
    }
}

/// Load `path` as an overlay on top of `base`.
///
/// # Errors
///
/// Returns [`MigrateError::Config`] when the file cannot be read or parsed.
pub fn load_config_file(base: MigrateConfig, path: &Path) -> Result<MigrateConfig, MigrateError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| MigrateError::Config(format!("{}: {error}", path.display())))?;
    base.merge(ConfigOverlay::from_yaml(&raw)?)
}

fn validate_date(raw: &str) -> Result<String, MigrateError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| MigrateError::Config(format!("default_created is not YYYY-MM-DD: {trimmed}")))
}
