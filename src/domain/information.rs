use super::commit::Commit;
use super::version::{Version, VersionBumpKind, VersionClassification};
use serde::Serialize;
use std::collections::HashMap;

/// Everything the formatters need to know about the computed version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInformation {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub increment: u64,
    pub kind: VersionBumpKind,
    pub commits: Vec<Commit>,
    pub changed: bool,
    pub is_tagged: bool,
}

impl VersionInformation {
    pub fn new(classification: VersionClassification, commits: Vec<Commit>, is_tagged: bool) -> Self {
        VersionInformation {
            major: classification.major,
            minor: classification.minor,
            patch: classification.patch,
            increment: classification.increment,
            kind: classification.kind,
            commits,
            changed: classification.changed,
            is_tagged,
        }
    }

    /// Information for a repository without any commits
    pub fn empty() -> Self {
        VersionInformation::new(
            VersionClassification::unchanged(Version::default()),
            Vec::new(),
            false,
        )
    }

    pub fn version(&self) -> Version {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Group commits by author, most active first.
    ///
    /// Authors with equal counts keep the order in which they were first seen.
    pub fn authors(&self) -> Vec<UserInfo> {
        let mut authors: Vec<UserInfo> = Vec::new();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();

        for commit in &self.commits {
            let key = (commit.author.as_str(), commit.author_email.as_str());
            match index.get(&key) {
                Some(&i) => authors[i].commits += 1,
                None => {
                    index.insert(key, authors.len());
                    authors.push(UserInfo::new(&commit.author, &commit.author_email, 1));
                }
            }
        }

        authors.sort_by(|a, b| b.commits.cmp(&a.commits));
        authors
    }
}

/// An author and the number of commits they contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub commits: usize,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>, commits: usize) -> Self {
        UserInfo {
            name: name.into(),
            email: email.into(),
            commits,
        }
    }
}
