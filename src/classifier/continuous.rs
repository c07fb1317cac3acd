use super::{BumpMatchers, ScanState, VersionClassifier};
use crate::domain::{CommitSet, LastRelease, VersionBumpKind, VersionClassification};
use crate::error::Result;
use crate::pattern::CommitMatcher;
use tracing::{debug, trace};

/// Bumps the patch number for every eligible commit.
///
/// A commit is eligible when it matches the patch pattern. Commits that are
/// not eligible only advance the increment counter, except in a repository
/// that has never produced a version: there the first commit always bumps.
pub struct ContinuousClassifier {
    matchers: BumpMatchers,
    patch: CommitMatcher,
    prerelease: bool,
}

impl ContinuousClassifier {
    pub fn new(matchers: BumpMatchers, patch: CommitMatcher, prerelease: bool) -> Self {
        ContinuousClassifier {
            matchers,
            patch,
            prerelease,
        }
    }
}

impl VersionClassifier for ContinuousClassifier {
    fn classify(
        &self,
        last_release: &LastRelease,
        commits: &CommitSet,
    ) -> Result<VersionClassification> {
        if let Some(current) = last_release.current {
            debug!(version = %current, "current commit is already tagged");
            return Ok(VersionClassification::unchanged(current));
        }
        if commits.is_empty() {
            return Ok(VersionClassification::unchanged(last_release.version()));
        }

        let result = commits.oldest_first().try_fold(
            ScanState::start(last_release.version()),
            |state, commit| match self.matchers.structural(commit) {
                Some(kind) => state.bump(kind, self.prerelease),
                None if self.patch.matches(commit) || state.version.is_zero() => {
                    state.bump(VersionBumpKind::Patch, self.prerelease)
                }
                None => {
                    trace!(hash = %commit.hash, "excluded from patch bump");
                    Ok(state.exclude())
                }
            },
        )?;

        debug!(
            kind = %result.kind,
            version = %result.version,
            increment = result.increment,
            "classified {} commits",
            commits.len()
        );
        Ok(result.into_classification(true))
    }
}
