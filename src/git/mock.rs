use crate::domain::{Commit, CommitSet, LastRelease, Version};
use crate::error::{Result, SemanticVersionError};
use crate::formatter::TagFormatter;
use crate::git::{CommitSetProvider, CurrentCommitResolver, ReleaseResolver};
use std::collections::HashMap;

/// In-memory linear history for testing without a git repository
pub struct MockRepository {
    /// Oldest first
    commits: Vec<Commit>,
    tags: HashMap<String, String>,
    broken_history: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            broken_history: false,
        }
    }

    /// Append a commit on top of the history and return its hash
    pub fn commit(&mut self, message: &str, author: &str, email: &str) -> String {
        let hash = format!("{:040x}", self.commits.len() + 1);
        self.commits
            .push(Commit::from_raw(hash.clone(), message, author, email));
        hash
    }

    /// Tag the latest commit
    pub fn tag_head(&mut self, name: impl Into<String>) {
        if let Some(head) = self.commits.last() {
            self.tags.insert(name.into(), head.hash.clone());
        }
    }

    /// Add a tag pointing to a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.insert(name.into(), hash.into());
    }

    /// Make every history read fail, as an unreadable object store would
    pub fn break_history(&mut self) {
        self.broken_history = true;
    }

    fn position(&self, hash: &str) -> Result<usize> {
        self.commits
            .iter()
            .position(|c| c.hash == hash)
            .ok_or_else(|| git2::Error::from_str(&format!("object not found - {}", hash)).into())
    }

    fn check_history(&self) -> Result<()> {
        if self.broken_history {
            Err(SemanticVersionError::Git(git2::Error::from_str(
                "failed to read object database",
            )))
        } else {
            Ok(())
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentCommitResolver for MockRepository {
    fn is_empty_repo(&self) -> Result<bool> {
        Ok(self.commits.is_empty())
    }

    fn resolve(&self) -> Result<String> {
        self.commits
            .last()
            .map(|c| c.hash.clone())
            .ok_or_else(|| git2::Error::from_str("reference 'HEAD' not found").into())
    }
}

impl ReleaseResolver for MockRepository {
    fn resolve_release(&self, current_commit: &str, tags: &TagFormatter) -> Result<LastRelease> {
        self.check_history()?;
        let current = self.position(current_commit)?;

        for index in (0..=current).rev() {
            let hash = &self.commits[index].hash;
            let version: Option<Version> = self
                .tags
                .iter()
                .filter(|(_, target)| *target == hash)
                .filter_map(|(name, _)| tags.parse(name))
                .max();

            if let Some(version) = version {
                return Ok(if index == current {
                    LastRelease::tagged_current(hash.clone(), version)
                } else {
                    LastRelease::at(hash.clone(), version)
                });
            }
        }

        Ok(LastRelease::none())
    }
}

impl CommitSetProvider for MockRepository {
    fn commits_between(&self, since: Option<&str>, until: &str) -> Result<CommitSet> {
        self.check_history()?;
        let end = self.position(until)?;
        let start = match since {
            Some(hash) => self.position(hash)? + 1,
            None => 0,
        };

        let commits = self
            .commits
            .get(start..=end)
            .unwrap_or_default()
            .iter()
            .rev()
            .cloned()
            .collect();
        Ok(CommitSet::new(commits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> TagFormatter {
        TagFormatter::new("v", "").unwrap()
    }

    #[test]
    fn test_mock_repository_empty() {
        let repo = MockRepository::new();
        assert!(repo.is_empty_repo().unwrap());
        assert!(repo.resolve().is_err());
    }

    #[test]
    fn test_mock_repository_head() {
        let mut repo = MockRepository::new();
        repo.commit("first", "Ann", "ann@x");
        let second = repo.commit("second", "Ann", "ann@x");
        assert!(!repo.is_empty_repo().unwrap());
        assert_eq!(repo.resolve().unwrap(), second);
    }

    #[test]
    fn test_mock_repository_commits_between_newest_first() {
        let mut repo = MockRepository::new();
        let first = repo.commit("first", "Ann", "ann@x");
        repo.commit("second", "Ann", "ann@x");
        let third = repo.commit("third", "Ann", "ann@x");

        let set = repo.commits_between(Some(&first), &third).unwrap();
        let messages: Vec<&str> = set.commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second"]);

        let all = repo.commits_between(None, &third).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_mock_repository_release() {
        let mut repo = MockRepository::new();
        let tagged = repo.commit("first", "Ann", "ann@x");
        repo.tag_head("v1.0.0");
        repo.tag_head("not-a-release");
        let head = repo.commit("second", "Ann", "ann@x");

        let release = repo.resolve_release(&head, &tags()).unwrap();
        assert_eq!(release, LastRelease::at(tagged, Version::new(1, 0, 0)));
    }

    #[test]
    fn test_mock_repository_highest_tag_on_commit_wins() {
        let mut repo = MockRepository::new();
        let head = repo.commit("first", "Ann", "ann@x");
        repo.tag_head("v1.0.0");
        repo.tag_head("v1.1.0");

        let release = repo.resolve_release(&head, &tags()).unwrap();
        assert_eq!(release.current, Some(Version::new(1, 1, 0)));
    }

    #[test]
    fn test_mock_repository_broken_history() {
        let mut repo = MockRepository::new();
        let head = repo.commit("first", "Ann", "ann@x");
        repo.break_history();
        assert!(repo.commits_between(None, &head).is_err());
    }
}
