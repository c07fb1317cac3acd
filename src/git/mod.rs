//! Git access abstraction layer
//!
//! The pipeline only talks to git through three small traits, one per
//! question it needs answered:
//!
//! - [CurrentCommitResolver]: which commit are we versioning?
//! - [ReleaseResolver]: what was the last release reachable from it?
//! - [CommitSetProvider]: which commits happened in between?
//!
//! Two implementations are provided:
//!
//! - [repository::Git2Repository]: reads a real repository through `git2`
//! - [mock::MockRepository]: an in-memory linear history for tests
//!
//! ```rust
//! # use semantic_version::git::{CommitSetProvider, CurrentCommitResolver, ReleaseResolver};
//! # use semantic_version::formatter::TagFormatter;
//! # fn example<R>(repo: &R) -> semantic_version::Result<()>
//! # where R: CurrentCommitResolver + ReleaseResolver + CommitSetProvider {
//! let tags = TagFormatter::new("v", "")?;
//! let head = repo.resolve()?;
//! let release = repo.resolve_release(&head, &tags)?;
//! let commits = repo.commits_between(release.hash.as_deref(), &head)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{CommitSet, LastRelease};
use crate::error::Result;
use crate::formatter::TagFormatter;

/// Resolves the commit the version is computed for
pub trait CurrentCommitResolver {
    /// Whether the repository has no commits at all
    fn is_empty_repo(&self) -> Result<bool>;

    /// Full hash of the current commit
    fn resolve(&self) -> Result<String>;
}

/// Finds the last release reachable from a commit
pub trait ReleaseResolver {
    /// Walk back from `current_commit` to the nearest commit carrying a tag
    /// that `tags` accepts.
    ///
    /// Returns [LastRelease::none] when no such tag exists. Only failures of
    /// the underlying repository are reported as errors.
    fn resolve_release(&self, current_commit: &str, tags: &TagFormatter) -> Result<LastRelease>;
}

/// Lists the commits between two points in history
pub trait CommitSetProvider {
    /// Commits reachable from `until` but not from `since`, newest first.
    ///
    /// `since == None` means "from the root of history".
    fn commits_between(&self, since: Option<&str>, until: &str) -> Result<CommitSet>;
}
