//! Commit message matchers used by the classifiers.
//!
//! A pattern written as `/expr/` is compiled as a regular expression; anything
//! else matches as a plain substring. Regex flags use the JavaScript letters
//! the CI inputs have always accepted.

use crate::domain::Commit;
use crate::error::{Result, SemanticVersionError};
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
enum Matcher {
    Always,
    Substring(String),
    Regex(Regex),
}

/// Predicate over a commit's subject (and optionally its body)
#[derive(Debug, Clone)]
pub struct CommitMatcher {
    matcher: Matcher,
    search_body: bool,
}

impl CommitMatcher {
    /// Parse a pattern with its flags.
    ///
    /// # Errors
    /// Returns a pattern error when a `/regex/` does not compile or uses an
    /// unknown flag.
    pub fn parse(pattern: &str, flags: &str, search_body: bool) -> Result<Self> {
        let matcher = match regex_body(pattern) {
            Some(expr) => Matcher::Regex(build_regex(expr, flags)?),
            None => Matcher::Substring(pattern.to_string()),
        };
        Ok(CommitMatcher {
            matcher,
            search_body,
        })
    }

    /// A matcher that accepts every commit
    pub fn always() -> Self {
        CommitMatcher {
            matcher: Matcher::Always,
            search_body: false,
        }
    }

    pub fn matches(&self, commit: &Commit) -> bool {
        if let Matcher::Always = self.matcher {
            return true;
        }
        if self.search_body {
            self.matches_text(&commit.full_message())
        } else {
            self.matches_text(&commit.message)
        }
    }

    fn matches_text(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Always => true,
            Matcher::Substring(needle) => text.contains(needle.as_str()),
            Matcher::Regex(re) => re.is_match(text),
        }
    }
}

fn regex_body(pattern: &str) -> Option<&str> {
    if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
        Some(&pattern[1..pattern.len() - 1])
    } else {
        None
    }
}

fn build_regex(expr: &str, flags: &str) -> Result<Regex> {
    let mut builder = RegexBuilder::new(expr);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            // global, unicode and sticky have no meaning for a single test
            'g' | 'u' | 'y' => {}
            other => {
                return Err(SemanticVersionError::pattern(format!(
                    "unsupported regex flag '{}' for /{}/",
                    other, expr
                )))
            }
        }
    }
    builder
        .build()
        .map_err(|e| SemanticVersionError::pattern(format!("/{}/: {}", expr, e)))
}
