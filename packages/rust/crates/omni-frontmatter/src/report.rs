//! Outcome tallies and human-readable report lines.

use std::fmt;
use std::path::PathBuf;

use crate::types::{Outcome, OutcomeKind, Population};

/// Width of the banner and separator rules.
pub const RULE_WIDTH: usize = 70;

/// Counts per outcome kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Documents rewritten (or that would be, in dry-run mode).
    pub converted: usize,
    /// Documents already converted or needing no change.
    pub unchanged: usize,
    /// Documents that failed.
    pub failed: usize,
}

impl Tally {
    /// Count one outcome.
    #[must_use]
    pub fn record(self, kind: OutcomeKind) -> Self {
        match kind {
            OutcomeKind::Converted => Self {
                converted: self.converted + 1,
                ..self
            },
            OutcomeKind::Unchanged => Self {
                unchanged: self.unchanged + 1,
                ..self
            },
            OutcomeKind::Failed => Self {
                failed: self.failed + 1,
                ..self
            },
        }
    }

    /// Fold a sequence of outcomes into a tally.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Self {
        outcomes
            .into_iter()
            .fold(Self::default(), |tally, outcome| tally.record(outcome.kind))
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(self) -> usize {
        self.converted + self.unchanged + self.failed
    }
}

impl std::ops::Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            converted: self.converted + rhs.converted,
            unchanged: self.unchanged + rhs.unchanged,
            failed: self.failed + rhs.failed,
        }
    }
}

/// Result of one population phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    /// Population processed in this phase.
    pub population: Population,
    /// Population root directory.
    pub root: PathBuf,
    /// `false` when the root directory was missing and the phase was skipped.
    pub ran: bool,
    /// Per-document outcomes in processing order.
    pub outcomes: Vec<Outcome>,
}

impl PhaseReport {
    /// Phase that was skipped because its root directory is missing.
    #[must_use]
    pub fn skipped(population: Population, root: PathBuf) -> Self {
        Self {
            population,
            root,
            ran: false,
            outcomes: Vec::new(),
        }
    }

    /// Tally of this phase's outcomes.
    #[must_use]
    pub fn tally(&self) -> Tally {
        Tally::from_outcomes(&self.outcomes)
    }
}

/// Result of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Phases in processing order.
    pub phases: Vec<PhaseReport>,
}

impl RunReport {
    /// Tally across every phase.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.phases
            .iter()
            .map(PhaseReport::tally)
            .fold(Tally::default(), std::ops::Add::add)
    }

    /// Phase report for `population`, if it was attempted.
    #[must_use]
    pub fn phase(&self, population: Population) -> Option<&PhaseReport> {
        self.phases.iter().find(|phase| phase.population == population)
    }
}

/// Per-document report line. Unchanged documents are counted silently.
#[must_use]
pub fn outcome_line(population: Population, outcome: &Outcome) -> Option<String> {
    let path = outcome.path.display();
    match (outcome.kind, population) {
        (OutcomeKind::Converted, Population::Study) => Some(format!("✅ {path}")),
        (OutcomeKind::Converted, Population::Interview) => {
            Some(format!("🔧 {path}: {}", outcome.message))
        }
        (OutcomeKind::Failed, _) => Some(format!("❌ {path}: {}", outcome.message)),
        (OutcomeKind::Unchanged, _) => None,
    }
}

/// Header printed before a phase starts.
#[must_use]
pub fn phase_heading(population: Population) -> String {
    let title = match population {
        Population::Study => "📚 converting study documents...",
        Population::Interview => "📝 fixing interview tags...",
    };
    format!("{title}\n{}", "-".repeat(RULE_WIDTH))
}

/// Diagnostic printed when a phase is skipped.
#[must_use]
pub fn missing_directory_line(root: &std::path::Path) -> String {
    format!("❌ directory not found: {}", root.display())
}

/// Display adapter for a phase summary block.
pub struct PhaseSummary<'a>(pub &'a PhaseReport);

impl fmt::Display for PhaseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let tally = report.tally();
        let (done_icon, done_label, skip_label) = match report.population {
            Population::Study => ("✅", "converted", "already converted"),
            Population::Interview => ("🔧", "fixed", "no change needed"),
        };
        writeln!(f, "📊 {} results:", report.population)?;
        if !report.ran {
            return writeln!(f, "   ⚠️  skipped (directory not found)");
        }
        writeln!(f, "   {done_icon} {done_label}: {}", tally.converted)?;
        writeln!(f, "   ⏭️  {skip_label}: {}", tally.unchanged)?;
        writeln!(f, "   ❌ errors: {}", tally.failed)
    }
}

/// Display adapter for the overall run summary.
pub struct RunSummary<'a>(pub &'a RunReport);

impl fmt::Display for RunSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tally = self.0.tally();
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "✨ all done")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "📁 {} of {} files modified",
            tally.converted,
            tally.total()
        )
    }
}
