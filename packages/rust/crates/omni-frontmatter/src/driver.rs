//! Batch driver - runs each population pipeline over its directory.
//!
//! Documents are processed strictly one after another in sorted path order.
//! Every per-document failure is folded into that document's [`Outcome`];
//! only a missing population root skips a phase, and each phase is gated on
//! its own root alone.

use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::MigrateConfig;
use crate::document::{read_document, write_document};
use crate::error::MigrateError;
use crate::extractor::extract_study_metadata;
use crate::normalizer::normalize_interview_tags;
use crate::report::{
    PhaseReport, PhaseSummary, RULE_WIDTH, RunReport, RunSummary, missing_directory_line,
    outcome_line, phase_heading,
};
use crate::types::{HeaderDefaults, Outcome, OutcomeKind, Population, Rewrite};
use crate::writer::{REASON_ALREADY_CONVERTED, convert_study_document, has_frontmatter};

/// Apply the pipeline of `population` to one document's text.
///
/// # Errors
///
/// Propagates the pipeline's malformed-document errors.
pub fn transform(
    population: Population,
    content: &str,
    defaults: &HeaderDefaults,
) -> Result<Rewrite, MigrateError> {
    match population {
        Population::Study => {
            if has_frontmatter(content) {
                return Ok(Rewrite::Unchanged {
                    reason: REASON_ALREADY_CONVERTED,
                });
            }
            let metadata = extract_study_metadata(content, defaults);
            convert_study_document(content, &metadata)
        }
        Population::Interview => normalize_interview_tags(content, defaults),
    }
}

/// Recursively collect files with `extension` under `root`, sorted by path.
///
/// Symlinks to files are included; symlinked directories are not descended.
#[must_use]
pub fn collect_documents(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(error = %error, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| {
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            is_file
                && entry.path().extension().is_some_and(|ext| ext == extension)
        })
        .map(walkdir::DirEntry::into_path)
        .collect();
    paths.sort();
    paths
}

/// Runs both population phases for one configuration.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    config: MigrateConfig,
}

impl BatchDriver {
    /// Create a driver for `config`.
    #[must_use]
    pub fn new(config: MigrateConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &MigrateConfig {
        &self.config
    }

    /// Process one document and classify the result. Never fails.
    #[must_use]
    pub fn process_document(&self, population: Population, path: &Path) -> Outcome {
        let rel_path = path
            .strip_prefix(&self.config.base_path)
            .unwrap_or(path)
            .to_path_buf();
        match self.try_process(population, path) {
            Ok(Rewrite::Changed { reason, .. }) => {
                tracing::debug!(path = %rel_path.display(), reason, "document rewritten");
                Outcome::new(rel_path, OutcomeKind::Converted, reason)
            }
            Ok(Rewrite::Unchanged { reason }) => {
                tracing::debug!(path = %rel_path.display(), reason, "document unchanged");
                Outcome::new(rel_path, OutcomeKind::Unchanged, reason)
            }
            Err(error) => {
                tracing::warn!(path = %rel_path.display(), error = %error, "document failed");
                Outcome::new(rel_path, OutcomeKind::Failed, error.to_string())
            }
        }
    }

    fn try_process(&self, population: Population, path: &Path) -> Result<Rewrite, MigrateError> {
        let content = read_document(path, self.config.max_bytes)?;
        let rewrite = transform(population, &content, &self.config.defaults)?;
        match &rewrite {
            Rewrite::Changed { content, .. } if !self.config.dry_run => {
                write_document(path, content)?;
            }
            _ => {}
        }
        Ok(rewrite)
    }

    /// Run one phase, writing per-document lines to `out` as they happen.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::DirectoryNotFound`] when the population root
    /// is missing, or `Io` when `out` cannot be written.
    pub fn run_phase<W: Write>(
        &self,
        population: Population,
        out: &mut W,
    ) -> Result<PhaseReport, MigrateError> {
        let root = self.config.population_root(population);
        if !root.is_dir() {
            return Err(MigrateError::DirectoryNotFound(root));
        }

        let documents = collect_documents(&root, &self.config.extension);
        let mut outcomes = Vec::with_capacity(documents.len());
        for path in &documents {
            let outcome = self.process_document(population, path);
            if let Some(line) = outcome_line(population, &outcome) {
                writeln!(out, "{line}")?;
            }
            outcomes.push(outcome);
        }

        let report = PhaseReport {
            population,
            root,
            ran: true,
            outcomes,
        };
        let tally = report.tally();
        tracing::info!(
            population = %population,
            converted = tally.converted,
            unchanged = tally.unchanged,
            failed = tally.failed,
            "phase complete"
        );
        Ok(report)
    }

    /// Run both phases and the overall summary, reporting to `out`.
    ///
    /// A missing population root is reported and skips only that phase.
    ///
    /// # Errors
    ///
    /// Returns `Io` when `out` cannot be written.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<RunReport, MigrateError> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "Obsidian tag migration")?;
        if self.config.dry_run {
            writeln!(out, "(dry run: no files will be written)")?;
        }
        writeln!(out, "{rule}")?;
        writeln!(out)?;

        let mut run = RunReport::default();
        for population in Population::ALL {
            writeln!(out, "{}", phase_heading(population))?;
            let phase = match self.run_phase(population, out) {
                Ok(phase) => phase,
                Err(MigrateError::DirectoryNotFound(root)) => {
                    tracing::warn!(root = %root.display(), "population directory not found");
                    writeln!(out, "{}", missing_directory_line(&root))?;
                    PhaseReport::skipped(population, root)
                }
                Err(error) => return Err(error),
            };
            writeln!(out)?;
            write!(out, "{}", PhaseSummary(&phase))?;
            writeln!(out)?;
            run.phases.push(phase);
        }

        write!(out, "{}", RunSummary(&run))?;
        Ok(run)
    }

    /// Run against stdout.
    ///
    /// # Errors
    ///
    /// Returns `Io` when stdout cannot be written.
    pub fn run(&self) -> Result<RunReport, MigrateError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run_with(&mut lock)
    }
}
