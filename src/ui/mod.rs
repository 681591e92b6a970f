//! User interface module - console output for a run.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Run-level reporting built on them

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_outcome, display_rules, display_status, display_success,
    display_summary, display_warning, format_outcome, format_summary,
};

use crate::domain::TargetVersion;
use std::path::Path;

/// Announce a run before any rule is applied.
///
/// Notes when the version is only a loose `MAJOR.MINOR.PATCH` prefix match
/// rather than strict SemVer; this is informational only.
///
/// # Arguments
/// * `version` - Target version
/// * `working_dir` - Directory rule paths resolve against
/// * `config_source` - Configuration file in use, `None` for built-in rules
pub fn display_run_header(
    version: &TargetVersion,
    working_dir: &Path,
    config_source: Option<&Path>,
) {
    match config_source {
        Some(path) => display_status(&format!("Using rules from {}", path.display())),
        None => display_status("Using built-in rules"),
    }

    if version.semver().is_none() {
        display_status(&format!(
            "'{}' is not strict SemVer; propagating it verbatim",
            version
        ));
    }

    display_status(&format!(
        "Propagating version {} in {}",
        version,
        working_dir.display()
    ));
}
