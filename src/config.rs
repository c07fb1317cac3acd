use crate::error::{Result, SemanticVersionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "semantic-version.toml";

/// Represents the complete configuration for semantic-version.
///
/// Every field has a default, so a partial TOML file is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Branch or revision to compute the version for
    pub branch: String,

    pub tag_prefix: String,

    pub major_pattern: String,
    pub major_flags: String,

    pub minor_pattern: String,
    pub minor_flags: String,

    /// Template for the formatted version
    pub version_format: String,

    /// Suffix appended to tags as `-<namespace>`
    pub namespace: String,

    /// Bump the patch number on every commit
    pub bump_each_commit: bool,

    /// Only commits matching this pattern bump the patch in continuous mode
    pub bump_each_commit_patch_pattern: String,

    pub search_commit_body: bool,

    /// `csv` or `json`
    pub user_format_type: String,

    /// Keep major at 0 until a 1.0.0 tag exists
    pub enable_prerelease_mode: bool,

    /// Space separated paths; when set only commits touching them count
    pub change_path: String,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branch: "HEAD".to_string(),
            tag_prefix: "v".to_string(),
            major_pattern: "(MAJOR)".to_string(),
            major_flags: String::new(),
            minor_pattern: "(MINOR)".to_string(),
            minor_flags: String::new(),
            version_format: "{major}.{minor}.{patch}".to_string(),
            namespace: String::new(),
            bump_each_commit: false,
            bump_each_commit_patch_pattern: String::new(),
            search_commit_body: false,
            user_format_type: "csv".to_string(),
            enable_prerelease_mode: false,
            change_path: String::new(),
            debug: false,
        }
    }
}

impl Config {
    /// Paths configured for change detection
    pub fn change_paths(&self) -> Vec<String> {
        self.change_path
            .split_whitespace()
            .map(|s| s.to_string())
            .collect()
    }

    /// Check values the rest of the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        if self.branch.trim().is_empty() {
            return Err(SemanticVersionError::config("branch must not be empty"));
        }
        if self.major_pattern.is_empty() || self.minor_pattern.is_empty() {
            return Err(SemanticVersionError::config(
                "major_pattern and minor_pattern must not be empty",
            ));
        }
        if !matches!(self.user_format_type.as_str(), "csv" | "json") {
            return Err(SemanticVersionError::config(format!(
                "unknown user_format_type '{}', expected 'csv' or 'json'",
                self.user_format_type
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semantic-version.toml` in current directory
/// 3. `.semantic-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Errors
/// Fails if a file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse a TOML document into a configuration
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| SemanticVersionError::config(e.to_string()))
}
