use crate::domain::{Commit, CommitSet, LastRelease, Version};
use crate::error::Result;
use crate::formatter::TagFormatter;
use crate::git::{CommitSetProvider, CurrentCommitResolver, ReleaseResolver};
use git2::{DiffOptions, ObjectType, Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Wrapper around git2::Repository implementing the pipeline's git traits
pub struct Git2Repository {
    repo: Git2Repo,
    branch: String,
    change_paths: Vec<String>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            branch: "HEAD".to_string(),
            change_paths: Vec::new(),
        }
    }

    /// Revision resolved as the current commit (a branch name, `HEAD`, ...)
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Only count commits touching one of these paths
    pub fn with_change_paths(mut self, paths: Vec<String>) -> Self {
        self.change_paths = paths;
        self
    }

    /// Map of commit -> highest release version tagged on it
    fn release_tags(&self, tags: &TagFormatter) -> Result<HashMap<Oid, Version>> {
        let mut releases: HashMap<Oid, Version> = HashMap::new();

        for tag_name in self.repo.tag_names(None)?.iter().flatten() {
            let Some(version) = tags.parse(tag_name) else {
                continue;
            };
            let reference = self.repo.find_reference(&format!("refs/tags/{}", tag_name))?;
            // Tags pointing at trees or blobs cannot mark a release
            let Ok(target) = reference.peel(ObjectType::Commit) else {
                continue;
            };

            let entry = releases.entry(target.id()).or_insert(version);
            if version > *entry {
                *entry = version;
            }
        }

        Ok(releases)
    }

    fn touches_change_paths(&self, commit: &git2::Commit<'_>) -> Result<bool> {
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut options = DiffOptions::new();
        for path in &self.change_paths {
            options.pathspec(path.as_str());
        }

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut options))?;
        Ok(diff.deltas().next().is_some())
    }
}

impl CurrentCommitResolver for Git2Repository {
    fn is_empty_repo(&self) -> Result<bool> {
        Ok(self.repo.is_empty()?)
    }

    fn resolve(&self) -> Result<String> {
        let commit = self.repo.revparse_single(&self.branch)?.peel_to_commit()?;
        debug!(branch = %self.branch, commit = %commit.id(), "resolved current commit");
        Ok(commit.id().to_string())
    }
}

impl ReleaseResolver for Git2Repository {
    fn resolve_release(&self, current_commit: &str, tags: &TagFormatter) -> Result<LastRelease> {
        let current = Oid::from_str(current_commit)?;
        let releases = self.release_tags(tags)?;

        if !releases.is_empty() {
            let mut revwalk = self.repo.revwalk()?;
            revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
            revwalk.push(current)?;

            for oid in revwalk {
                let oid = oid?;
                if let Some(&version) = releases.get(&oid) {
                    debug!(commit = %oid, %version, "found last release");
                    return Ok(if oid == current {
                        LastRelease::tagged_current(oid.to_string(), version)
                    } else {
                        LastRelease::at(oid.to_string(), version)
                    });
                }
            }
        }

        if self.repo.is_shallow() {
            warn!(
                "No release tag found in a shallow clone; fetch the full history \
                 (e.g. fetch-depth: 0) for accurate versions"
            );
        }
        debug!("no release tag reachable, starting from 0.0.0");
        Ok(LastRelease::none())
    }
}

impl CommitSetProvider for Git2Repository {
    fn commits_between(&self, since: Option<&str>, until: &str) -> Result<CommitSet> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(Oid::from_str(until)?)?;
        if let Some(since) = since {
            revwalk.hide(Oid::from_str(since)?)?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;

            if !self.change_paths.is_empty() && !self.touches_change_paths(&commit)? {
                continue;
            }

            let author = commit.author();
            commits.push(Commit::from_raw(
                commit.id().to_string(),
                commit.message().unwrap_or(""),
                author.name().unwrap_or("unknown"),
                author.email().unwrap_or(""),
            ));
        }

        debug!(count = commits.len(), "collected commits since last release");
        Ok(CommitSet::new(commits))
    }
}
