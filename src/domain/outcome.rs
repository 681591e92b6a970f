use std::fmt;
use std::path::PathBuf;

/// Result of applying one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Pattern found and replaced (or would be, in a dry run)
    Updated,
    /// File exists but the pattern does not occur in it
    PatternNotFound,
    /// Target file does not exist
    FileMissing,
    /// Reading or writing the file failed
    WriteError(String),
}

impl PatchOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, PatchOutcome::Updated)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Updated => write!(f, "updated"),
            PatchOutcome::PatternNotFound => write!(f, "pattern not found"),
            PatchOutcome::FileMissing => write!(f, "file missing"),
            PatchOutcome::WriteError(message) => write!(f, "write error: {}", message),
        }
    }
}

/// Outcome of one rule, with enough context to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub rule: String,
    pub file: PathBuf,
    pub outcome: PatchOutcome,
}

/// Aggregate result of a propagation run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub updated_count: usize,
    pub results: Vec<RuleReport>,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        RunSummary {
            updated_count: 0,
            results: Vec::new(),
            dry_run,
        }
    }

    /// Append a report, keeping `updated_count` in step
    pub fn record(&mut self, report: RuleReport) {
        if report.outcome.is_updated() {
            self.updated_count += 1;
        }
        self.results.push(report);
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &PatchOutcome> {
        self.results.iter().map(|r| &r.outcome)
    }
}
