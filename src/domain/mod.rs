//! Domain logic - pure patching rules independent of the filesystem

pub mod outcome;
pub mod rule;
pub mod version;

pub use outcome::{PatchOutcome, RuleReport, RunSummary};
pub use rule::{PatchRule, VERSION_PLACEHOLDER};
pub use version::TargetVersion;
