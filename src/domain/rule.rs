use crate::domain::TargetVersion;
use crate::error::Result;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

/// Placeholder substituted with the target version in replacement templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// A single find-and-replace rule against one file.
///
/// The replacement template may contain `{version}` and capture group
/// references (`$1`, `${indent}`) from the pattern.
#[derive(Debug, Clone)]
pub struct PatchRule {
    name: String,
    target_file: PathBuf,
    pattern: Regex,
    template: String,
}

impl PatchRule {
    /// Build a rule, compiling its pattern.
    ///
    /// # Returns
    /// * `Ok(PatchRule)` - Pattern compiled
    /// * `Err(VerstampError::Pattern)` - Pattern is not a valid regex
    pub fn new(
        name: impl Into<String>,
        target_file: impl Into<PathBuf>,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self> {
        Ok(PatchRule {
            name: name.into(),
            target_file: target_file.into(),
            pattern: Regex::new(pattern)?,
            template: template.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_file(&self) -> &Path {
        &self.target_file
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the replacement text for one match.
    ///
    /// The version is inserted literally, so a `$` inside a version suffix
    /// is never read as a group reference.
    pub fn render_replacement(&self, caps: &Captures<'_>, version: &TargetVersion) -> String {
        let mut rendered = String::new();
        for (i, piece) in self.template.split(VERSION_PLACEHOLDER).enumerate() {
            if i > 0 {
                rendered.push_str(version.as_str());
            }
            caps.expand(piece, &mut rendered);
        }
        rendered
    }

    /// Replace the first match in `content`.
    ///
    /// Returns `None` when the pattern does not occur. Text outside the
    /// match is preserved byte for byte.
    pub fn apply_to(&self, content: &str, version: &TargetVersion) -> Option<String> {
        let caps = self.pattern.captures(content)?;
        let matched = caps.get(0)?;
        let replacement = self.render_replacement(&caps, version);

        let mut patched = String::with_capacity(content.len() + replacement.len());
        patched.push_str(&content[..matched.start()]);
        patched.push_str(&replacement);
        patched.push_str(&content[matched.end()..]);
        Some(patched)
    }
}
