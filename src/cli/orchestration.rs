//! Version computation workflow
//!
//! Resolves the current commit, the last release and the commits between
//! them, classifies those commits and formats the outputs. Each step feeds the
//! next, so the flow is strictly sequential.

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::classifier::build_classifier;
use crate::config::Config;
use crate::domain::{LastRelease, VersionBumpKind, VersionInformation};
use crate::error::Result;
use crate::formatter::{TagFormatter, UserFormatter, VersionFormatter};
use crate::git::{CommitSetProvider, CurrentCommitResolver, ReleaseResolver};

/// Values handed to the CI output layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionResult {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub increment: u64,
    pub version_type: VersionBumpKind,
    pub formatted_version: String,
    pub version_tag: String,
    pub changed: bool,
    pub is_tagged: bool,
    pub authors: String,
    pub current_commit: String,
    pub previous_commit: String,
    pub previous_version: String,
    pub debug_output: String,
}

/// Formatters selected by the configuration
struct Formatters {
    version: VersionFormatter,
    tag: TagFormatter,
    user: UserFormatter,
}

impl Formatters {
    fn from_config(config: &Config) -> Result<Self> {
        Ok(Formatters {
            version: VersionFormatter::new(config.version_format.as_str()),
            tag: TagFormatter::new(config.tag_prefix.as_str(), config.namespace.as_str())?,
            user: UserFormatter::from_type(&config.user_format_type)?,
        })
    }

    fn result(
        &self,
        info: &VersionInformation,
        current_commit: String,
        last_release: &LastRelease,
        debug_output: String,
    ) -> Result<VersionResult> {
        Ok(VersionResult {
            major: info.major,
            minor: info.minor,
            patch: info.patch,
            increment: info.increment,
            version_type: info.kind,
            formatted_version: self.version.format(info),
            version_tag: self.tag.format(info),
            changed: info.changed,
            is_tagged: info.is_tagged,
            authors: self.user.format("author", &info.authors())?,
            current_commit,
            previous_commit: last_release.hash.clone().unwrap_or_default(),
            previous_version: last_release.version().to_string(),
            debug_output,
        })
    }
}

/// Compute the version of the repository behind `repo`.
///
/// An empty repository yields version `0.0.0` with `changed = false`. Any
/// failure reading history aborts the computation.
pub fn run_action<R>(repo: &R, config: &Config) -> Result<VersionResult>
where
    R: CurrentCommitResolver + ReleaseResolver + CommitSetProvider,
{
    config.validate()?;
    let classifier = build_classifier(config)?;
    let formatters = Formatters::from_config(config)?;

    if repo.is_empty_repo()? {
        info!("Repository has no commits, reporting 0.0.0");
        let info = VersionInformation::empty();
        let release = LastRelease::none();
        let debug = debug_output(config, &release, &info)?;
        return formatters.result(&info, String::new(), &release, debug);
    }

    let current_commit = repo.resolve()?;
    let last_release = repo.resolve_release(&current_commit, &formatters.tag)?;
    let commit_set = repo.commits_between(last_release.hash.as_deref(), &current_commit)?;
    let classification = classifier.classify(&last_release, &commit_set)?;

    let info = VersionInformation::new(classification, commit_set.commits, last_release.is_tagged);
    let debug = debug_output(config, &last_release, &info)?;
    let result = formatters.result(&info, current_commit, &last_release, debug)?;

    if !result.changed {
        info!("No changes detected for this commit");
    }
    info!(
        version = %result.formatted_version,
        tag = %result.version_tag,
        kind = %result.version_type,
        "Computed version"
    );
    Ok(result)
}

fn debug_output(config: &Config, release: &LastRelease, info: &VersionInformation) -> Result<String> {
    if !config.debug {
        return Ok(String::new());
    }
    let document = json!({
        "config": config,
        "last_release": release,
        "commits": info.commits,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
