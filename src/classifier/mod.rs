//! Classification engine: turns a commit set into a version bump
//!
//! Both classifiers scan commits from oldest to newest as a fold over an
//! immutable [ScanState]. Each commit produces the next state; nothing is
//! mutated in place, so every step can be checked in isolation.

pub mod continuous;
pub mod default;

pub use continuous::ContinuousClassifier;
pub use default::DefaultClassifier;

use crate::config::Config;
use crate::domain::{
    Commit, CommitSet, LastRelease, Version, VersionBumpKind, VersionClassification,
};
use crate::error::Result;
use crate::pattern::CommitMatcher;

/// Strategy deciding how a commit set moves the version
pub trait VersionClassifier: Send + Sync {
    /// # Errors
    /// Returns a version error if a bump would overflow a version part.
    fn classify(
        &self,
        last_release: &LastRelease,
        commits: &CommitSet,
    ) -> Result<VersionClassification>;
}

/// Build the classifier selected by the configuration.
///
/// # Errors
/// Returns a pattern error if any configured pattern is malformed.
pub fn build_classifier(config: &Config) -> Result<Box<dyn VersionClassifier>> {
    let matchers = BumpMatchers::from_config(config)?;
    if config.bump_each_commit {
        let patch = if config.bump_each_commit_patch_pattern.is_empty() {
            CommitMatcher::always()
        } else {
            CommitMatcher::parse(
                &config.bump_each_commit_patch_pattern,
                "",
                config.search_commit_body,
            )?
        };
        Ok(Box::new(ContinuousClassifier::new(
            matchers,
            patch,
            config.enable_prerelease_mode,
        )))
    } else {
        Ok(Box::new(DefaultClassifier::new(
            matchers,
            config.enable_prerelease_mode,
        )))
    }
}

/// Major and minor matchers shared by both classifiers
#[derive(Debug, Clone)]
pub struct BumpMatchers {
    pub major: CommitMatcher,
    pub minor: CommitMatcher,
}

impl BumpMatchers {
    pub fn new(major: CommitMatcher, minor: CommitMatcher) -> Self {
        BumpMatchers { major, minor }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(BumpMatchers {
            major: CommitMatcher::parse(
                &config.major_pattern,
                &config.major_flags,
                config.search_commit_body,
            )?,
            minor: CommitMatcher::parse(
                &config.minor_pattern,
                &config.minor_flags,
                config.search_commit_body,
            )?,
        })
    }

    /// Major is checked first, so a commit matching both is a major bump
    pub fn structural(&self, commit: &Commit) -> Option<VersionBumpKind> {
        if self.major.matches(commit) {
            Some(VersionBumpKind::Major)
        } else if self.minor.matches(commit) {
            Some(VersionBumpKind::Minor)
        } else {
            None
        }
    }
}

/// Running result of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub version: Version,
    pub kind: VersionBumpKind,
    pub increment: u64,
}

impl ScanState {
    pub fn start(version: Version) -> Self {
        ScanState {
            version,
            kind: VersionBumpKind::None,
            increment: 0,
        }
    }

    /// Move the version and reset the increment
    pub fn bump(self, kind: VersionBumpKind, prerelease: bool) -> Result<Self> {
        Ok(ScanState {
            version: self.version.bump(kind, prerelease)?,
            kind,
            increment: 0,
        })
    }

    /// Count a commit that did not move the version, keeping the last kind
    pub fn carry(self) -> Self {
        ScanState {
            increment: self.increment + 1,
            ..self
        }
    }

    /// Count a commit that is explicitly excluded from bumping
    pub fn exclude(self) -> Self {
        ScanState {
            kind: VersionBumpKind::None,
            increment: self.increment + 1,
            ..self
        }
    }

    pub fn into_classification(self, changed: bool) -> VersionClassification {
        VersionClassification {
            kind: self.kind,
            increment: self.increment,
            changed,
            major: self.version.major,
            minor: self.version.minor,
            patch: self.version.patch,
        }
    }
}
