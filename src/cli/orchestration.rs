//! Main workflow orchestration logic
//!
//! Keeps argument parsing in `main.rs` and the run itself here, so the
//! workflow can be driven programmatically without clap.

use std::path::{Path, PathBuf};

use crate::config;
use crate::domain::{RunSummary, TargetVersion};
use crate::error::Result;
use crate::propagate::{Propagator, RunMode};
use crate::ui;
use crate::workspace::FsWorkspace;

/// Arguments for the propagation workflow
///
/// Mirrors the CLI arguments in a form independent of clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagateWorkflowArgs {
    /// Raw version argument, `None` when not supplied
    pub version: Option<String>,

    /// Directory rule paths resolve against
    pub working_dir: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Preview mode - report without writing
    pub dry_run: bool,
}

/// Result of a completed propagation workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version that was propagated
    pub version: TargetVersion,

    /// Per-rule outcomes and the updated count
    pub summary: RunSummary,
}

/// Main propagation workflow
///
/// 1. Validate the version argument
/// 2. Load configuration and compile rules
/// 3. Apply every rule to the working directory
/// 4. Report each outcome and the total
///
/// Steps 1 and 2 fail before any file is read. Per-rule failures in step 3
/// never surface as `Err`; they are part of the summary.
pub fn run_propagate_workflow(args: PropagateWorkflowArgs) -> Result<WorkflowResult> {
    let version = TargetVersion::from_arg(args.version.as_deref())?;
    let (propagator, config_source) =
        load_propagator(args.config_path.as_deref(), &args.working_dir)?;

    ui::display_run_header(&version, &args.working_dir, config_source.as_deref());

    let mode = if args.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Write
    };

    let workspace = FsWorkspace::new(&args.working_dir);
    let summary = propagator.run(&version, &workspace, mode);

    ui::display_summary(&summary, &version);

    Ok(WorkflowResult { version, summary })
}

/// Load configuration and compile its rules.
///
/// Also returns the configuration file the rules came from, `None` when the
/// built-in rules are used.
pub fn load_propagator(
    config_path: Option<&Path>,
    working_dir: &Path,
) -> Result<(Propagator, Option<PathBuf>)> {
    let loaded = config::load_config(config_path, working_dir)?;
    let rules = loaded.config.build_rules()?;
    Ok((Propagator::new(rules), loaded.source))
}
