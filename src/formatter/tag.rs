use crate::domain::{Version, VersionInformation};
use crate::error::{Result, SemanticVersionError};
use regex::Regex;

/// Formats, validates and parses release tag names.
///
/// Tags look like `<prefix><major>.<minor>.<patch>` with an optional
/// `-<namespace>` suffix (e.g. `v1.2.3`, `v1.2.3-frontend`).
#[derive(Debug, Clone)]
pub struct TagFormatter {
    prefix: String,
    namespace: String,
    matcher: Regex,
}

impl TagFormatter {
    pub fn new(prefix: impl Into<String>, namespace: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let namespace = namespace.into();

        let suffix = if namespace.is_empty() {
            String::new()
        } else {
            format!("-{}", regex::escape(&namespace))
        };
        let pattern = format!(r"^{}(\d+\.\d+\.\d+){}$", regex::escape(&prefix), suffix);
        let matcher = Regex::new(&pattern)
            .map_err(|e| SemanticVersionError::pattern(format!("tag format: {}", e)))?;

        Ok(TagFormatter {
            prefix,
            namespace,
            matcher,
        })
    }

    pub fn format(&self, info: &VersionInformation) -> String {
        self.format_version(info.version())
    }

    pub fn format_version(&self, version: Version) -> String {
        if self.namespace.is_empty() {
            format!("{}{}", self.prefix, version)
        } else {
            format!("{}{}-{}", self.prefix, version, self.namespace)
        }
    }

    /// Extract the version from a tag, if it follows this format
    pub fn parse(&self, tag: &str) -> Option<Version> {
        let captures = self.matcher.captures(tag)?;
        let version = semver::Version::parse(captures.get(1)?.as_str()).ok()?;
        Some(version.into())
    }
}
