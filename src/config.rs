use crate::domain::PatchRule;
use crate::error::{Result, VerstampError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = "verstamp.toml";

/// Represents the complete configuration for verstamp.
///
/// Holds the ordered rule table; a file without `[[rules]]` falls back to
/// the built-in rules.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleConfig>,
}

/// One rule as written in the configuration file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RuleConfig {
    /// Label used in output; defaults to the file path
    #[serde(default)]
    pub name: Option<String>,

    /// Path relative to the working directory
    pub file: PathBuf,

    /// Regular expression; the first match is replaced
    pub pattern: String,

    /// Replacement template with `{version}` and `$n` / `${name}` groups
    pub replacement: String,
}

impl RuleConfig {
    fn new(name: &str, file: &str, pattern: &str, replacement: &str) -> Self {
        RuleConfig {
            name: Some(name.to_string()),
            file: PathBuf::from(file),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    /// Display label for the rule
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

/// Returns the built-in rule table.
fn default_rules() -> Vec<RuleConfig> {
    vec![
        RuleConfig::new(
            "manifest version",
            "pubspec.yaml",
            r"(?m)^([ \t]*)version: [^\r\n]*",
            "${1}version: {version}+1",
        ),
        RuleConfig::new(
            "manifest msix_version",
            "pubspec.yaml",
            r"(?m)^([ \t]*)msix_version: [^\r\n]*",
            "${1}msix_version: {version}.0",
        ),
        RuleConfig::new(
            "windows resource",
            "windows/runner/Runner.rc",
            r#"#define VERSION_AS_STRING "[^"\r\n]*""#,
            r#"#define VERSION_AS_STRING "{version}""#,
        ),
        RuleConfig::new(
            "installer script",
            "build_script/inno_setup.iss",
            r#"#define MyAppVersion "[^"\r\n]*""#,
            r#"#define MyAppVersion "{version}""#,
        ),
        RuleConfig::new(
            "widget test",
            "test/widget_test.dart",
            r"child: const MyApp\(version: '[^'\r\n]*'\)",
            "child: const MyApp(version: '{version}')",
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| VerstampError::config(e.to_string()))
    }

    /// Compile every rule, in order.
    ///
    /// # Returns
    /// * `Ok(Vec<PatchRule>)` - All patterns compiled
    /// * `Err(VerstampError::Pattern)` - The first pattern that failed
    pub fn build_rules(&self) -> Result<Vec<PatchRule>> {
        self.rules
            .iter()
            .map(|rule| {
                PatchRule::new(
                    rule.label(),
                    rule.file.clone(),
                    &rule.pattern,
                    rule.replacement.clone(),
                )
            })
            .collect()
    }
}

/// A configuration together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,

    /// File the rules were read from, `None` for built-in rules
    pub source: Option<PathBuf>,
}

/// Finds the configuration file that applies, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `verstamp.toml` in the working directory
///
/// A custom path is returned even when it does not exist, so that loading
/// it reports the error.
pub fn locate_config(config_path: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let project = working_dir.join(CONFIG_FILE_NAME);
    project.exists().then_some(project)
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `working_dir` - Directory searched for `verstamp.toml`
///
/// # Returns
/// * `Ok(LoadedConfig)` - Loaded or default configuration, with its source
/// * `Err` - If a file was found but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, working_dir: &Path) -> Result<LoadedConfig> {
    let source = locate_config(config_path, working_dir);
    let config = match &source {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                VerstampError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            Config::from_toml(&text)?
        }
        None => Config::default(),
    };

    Ok(LoadedConfig { config, source })
}
