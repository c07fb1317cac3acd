use crate::error::{Result, SemanticVersionError};
use serde::Serialize;
use std::fmt;

/// Semantic version triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Version::default()
    }

    /// Apply one bump of the given kind.
    ///
    /// In prerelease mode a `0.x.y` version never reaches `1.0.0`: major bumps
    /// are demoted to minor and minor bumps to patch.
    ///
    /// # Errors
    /// Returns a version error if the bumped part is already `u64::MAX`.
    pub fn bump(&self, kind: VersionBumpKind, prerelease: bool) -> Result<Self> {
        let kind = if prerelease && self.major == 0 {
            match kind {
                VersionBumpKind::Major => VersionBumpKind::Minor,
                VersionBumpKind::Minor => VersionBumpKind::Patch,
                other => other,
            }
        } else {
            kind
        };

        Ok(match kind {
            VersionBumpKind::Major => Version::new(increment(self, "major", self.major)?, 0, 0),
            VersionBumpKind::Minor => {
                Version::new(self.major, increment(self, "minor", self.minor)?, 0)
            }
            VersionBumpKind::Patch => {
                Version::new(self.major, self.minor, increment(self, "patch", self.patch)?)
            }
            VersionBumpKind::None => *self,
        })
    }
}

fn increment(version: &Version, part: &str, value: u64) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        SemanticVersionError::version(format!("cannot bump {} of {}", part, version))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version::new(v.major, v.minor, v.patch)
    }
}

/// Severity of a version change, ordered so that `Major` is highest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBumpKind {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl VersionBumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBumpKind::None => "none",
            VersionBumpKind::Patch => "patch",
            VersionBumpKind::Minor => "minor",
            VersionBumpKind::Major => "major",
        }
    }
}

impl fmt::Display for VersionBumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a commit set against the last release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionClassification {
    pub kind: VersionBumpKind,
    /// Commits since the last point that moved the version
    pub increment: u64,
    pub changed: bool,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionClassification {
    /// A classification that leaves `version` untouched
    pub fn unchanged(version: Version) -> Self {
        VersionClassification {
            kind: VersionBumpKind::None,
            increment: 0,
            changed: false,
            major: version.major,
            minor: version.minor,
            patch: version.patch,
        }
    }

    pub fn version(&self) -> Version {
        Version::new(self.major, self.minor, self.patch)
    }
}
