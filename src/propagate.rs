//! Applies the rule table to a workspace
//!
//! Each rule is isolated: a missing file, absent pattern or I/O failure is
//! recorded against that rule and the run moves on. Edits already written
//! are never rolled back.

use crate::domain::{PatchOutcome, PatchRule, RuleReport, RunSummary, TargetVersion};
use crate::workspace::Workspace;

/// Whether matched files are actually rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Write,
    DryRun,
}

/// Applies an ordered list of rules to one workspace.
pub struct Propagator {
    rules: Vec<PatchRule>,
}

impl Propagator {
    pub fn new(rules: Vec<PatchRule>) -> Self {
        Propagator { rules }
    }

    pub fn rules(&self) -> &[PatchRule] {
        &self.rules
    }

    /// Run every rule in order and collect the outcomes.
    ///
    /// # Arguments
    /// * `version` - Already validated target version
    /// * `workspace` - Files are resolved against its root
    /// * `mode` - [RunMode::DryRun] skips every write
    ///
    /// # Returns
    /// A [RunSummary] whose `updated_count` equals the number of
    /// [PatchOutcome::Updated] results.
    pub fn run<W: Workspace>(
        &self,
        version: &TargetVersion,
        workspace: &W,
        mode: RunMode,
    ) -> RunSummary {
        let mut summary = RunSummary::new(mode == RunMode::DryRun);

        for rule in &self.rules {
            let outcome = apply_rule(rule, version, workspace, mode);
            summary.record(RuleReport {
                rule: rule.name().to_string(),
                file: rule.target_file().to_path_buf(),
                outcome,
            });
        }

        summary
    }
}

/// Apply one rule to its target file.
pub fn apply_rule<W: Workspace>(
    rule: &PatchRule,
    version: &TargetVersion,
    workspace: &W,
    mode: RunMode,
) -> PatchOutcome {
    let file = rule.target_file();

    if !workspace.exists(file) {
        return PatchOutcome::FileMissing;
    }

    let content = match workspace.read_to_string(file) {
        Ok(content) => content,
        Err(e) => return PatchOutcome::WriteError(e.to_string()),
    };

    let patched = match rule.apply_to(&content, version) {
        Some(patched) => patched,
        None => return PatchOutcome::PatternNotFound,
    };

    if mode == RunMode::DryRun {
        return PatchOutcome::Updated;
    }

    match workspace.write(file, &patched) {
        Ok(()) => PatchOutcome::Updated,
        Err(e) => PatchOutcome::WriteError(e.to_string()),
    }
}
