use crate::error::{Result, VerstampError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn version_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+").expect("static version regex"))
}

/// Version string propagated into every rule.
///
/// Only the `MAJOR.MINOR.PATCH` prefix is checked; anything after it
/// (`-beta.1`, `+build`, ...) is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion(String);

impl TargetVersion {
    /// Parse a version argument.
    ///
    /// # Returns
    /// * `Ok(TargetVersion)` - Input starts with `MAJOR.MINOR.PATCH`
    /// * `Err(MissingArgument)` - Input is empty
    /// * `Err(InvalidVersionFormat)` - Anything else
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(VerstampError::MissingArgument);
        }

        if !version_prefix().is_match(input) {
            return Err(VerstampError::invalid_version(input));
        }

        Ok(TargetVersion(input.to_string()))
    }

    /// Parse an optional argument, treating `None` as missing
    pub fn from_arg(input: Option<&str>) -> Result<Self> {
        match input {
            Some(value) => Self::parse(value),
            None => Err(VerstampError::MissingArgument),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strict SemVer view, if the string happens to be one
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.0).ok()
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
