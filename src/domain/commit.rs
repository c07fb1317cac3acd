use serde::Serialize;

/// A single commit as seen by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Full commit hash
    pub hash: String,
    /// Subject line of the commit message
    pub message: String,
    /// Everything after the subject line, trimmed
    pub body: String,
    pub author: String,
    pub author_email: String,
}

impl Commit {
    /// Build a commit from a raw message, splitting it into subject and body
    pub fn from_raw(
        hash: impl Into<String>,
        raw_message: &str,
        author: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        let (message, body) = split_message(raw_message);
        Commit {
            hash: hash.into(),
            message,
            body,
            author: author.into(),
            author_email: author_email.into(),
        }
    }

    /// Subject and body joined back together, used when body search is enabled
    pub fn full_message(&self) -> String {
        if self.body.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{}", self.message, self.body)
        }
    }
}

fn split_message(raw: &str) -> (String, String) {
    let raw = raw.trim();
    match raw.split_once('\n') {
        Some((subject, body)) => (subject.trim().to_string(), body.trim().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// Commits between the last release and the current commit.
///
/// Ordered newest first, the way history walks deliver them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSet {
    pub commits: Vec<Commit>,
}

impl CommitSet {
    pub fn new(commits: Vec<Commit>) -> Self {
        CommitSet { commits }
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Iterate from the oldest commit to the newest
    pub fn oldest_first(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter().rev()
    }
}
