use super::{BumpMatchers, ScanState, VersionClassifier};
use crate::domain::{CommitSet, LastRelease, VersionBumpKind, VersionClassification};
use crate::error::Result;
use tracing::{debug, trace};

/// Classifies by major/minor patterns.
///
/// A non-empty commit set with no major or minor match still gets exactly one
/// patch bump, whatever its size.
pub struct DefaultClassifier {
    matchers: BumpMatchers,
    prerelease: bool,
}

impl DefaultClassifier {
    pub fn new(matchers: BumpMatchers, prerelease: bool) -> Self {
        DefaultClassifier {
            matchers,
            prerelease,
        }
    }
}

impl VersionClassifier for DefaultClassifier {
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

        let start = ScanState::start(last_release.version());
        let scanned = commits.oldest_first().try_fold(start, |state, commit| {
            match self.matchers.structural(commit) {
                Some(kind) => {
                    trace!(hash = %commit.hash, %kind, "structural match");
                    state.bump(kind, self.prerelease)
                }
                None => Ok(state.carry()),
            }
        })?;

        let result = if scanned.kind == VersionBumpKind::None {
            ScanState {
                increment: commits.len() as u64 - 1,
                ..start.bump(VersionBumpKind::Patch, self.prerelease)?
            }
        } else {
            scanned
        };

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
