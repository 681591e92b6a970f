//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*`
//! functions print them. Colours come from `console` and are dropped
//! automatically when the stream is not a terminal.

use console::style;

use crate::domain::{PatchOutcome, PatchRule, RuleReport, RunSummary, TargetVersion};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One line describing a rule's outcome, without colour.
///
/// # Arguments
/// * `report` - The rule's report
/// * `version` - Target version, mentioned for updated files
/// * `dry_run` - Phrase updates as "would update"
pub fn format_outcome(report: &RuleReport, version: &TargetVersion, dry_run: bool) -> String {
    let file = report.file.display();
    match &report.outcome {
        PatchOutcome::Updated if dry_run => {
            format!("Would update {} ({}) to {}", file, report.rule, version)
        }
        PatchOutcome::Updated => format!("Updated {} ({}) to {}", file, report.rule, version),
        PatchOutcome::PatternNotFound => {
            format!("Pattern not found in {} ({}), skipped", file, report.rule)
        }
        PatchOutcome::FileMissing => format!("File {} not found ({}), skipped", file, report.rule),
        PatchOutcome::WriteError(message) => {
            format!("Failed to update {} ({}): {}", file, report.rule, message)
        }
    }
}

/// Print a rule outcome with the severity that matches it.
pub fn display_outcome(report: &RuleReport, version: &TargetVersion, dry_run: bool) {
    let line = format_outcome(report, version, dry_run);
    match report.outcome {
        PatchOutcome::Updated => display_success(&line),
        PatchOutcome::PatternNotFound | PatchOutcome::FileMissing => display_warning(&line),
        PatchOutcome::WriteError(_) => display_error(&line),
    }
}

/// Final count line, without colour.
pub fn format_summary(summary: &RunSummary) -> String {
    let verb = if summary.dry_run {
        "would be updated"
    } else {
        "updated"
    };
    format!(
        "{} of {} rules {}",
        summary.updated_count,
        summary.results.len(),
        verb
    )
}

/// Print every outcome followed by the summary line.
pub fn display_summary(summary: &RunSummary, version: &TargetVersion) {
    for report in &summary.results {
        display_outcome(report, version, summary.dry_run);
    }
    println!("\n{}", style(format_summary(summary)).bold());
}

/// Display the rule table.
///
/// # Arguments
/// * `rules` - Compiled rules, in execution order
pub fn display_rules(rules: &[PatchRule]) {
    println!("{}", style("Configured rules:").bold());
    for (i, rule) in rules.iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            i + 1,
            rule.name(),
            style(rule.target_file().display()).cyan()
        );
        println!("     pattern:     {}", rule.pattern().as_str());
        println!("     replacement: {}", rule.template());
    }
}
