//! Rendering of a [VersionResult] for CI systems and humans.
//!
//! Machine readable output goes to stdout or the `GITHUB_OUTPUT` file; the
//! human summary goes to stderr so it never mixes with values a pipeline
//! captures.

use console::style;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::orchestration::VersionResult;
use crate::error::Result;

/// Output names paired with their values, in a stable order
pub fn output_pairs(result: &VersionResult) -> Vec<(&'static str, String)> {
    vec![
        ("version", result.formatted_version.clone()),
        ("major", result.major.to_string()),
        ("minor", result.minor.to_string()),
        ("patch", result.patch.to_string()),
        ("increment", result.increment.to_string()),
        ("version_type", result.version_type.to_string()),
        ("changed", result.changed.to_string()),
        ("is_tagged", result.is_tagged.to_string()),
        ("version_tag", result.version_tag.clone()),
        ("authors", result.authors.clone()),
        ("previous_commit", result.previous_commit.clone()),
        ("previous_version", result.previous_version.clone()),
        ("current_commit", result.current_commit.clone()),
        ("debug_output", result.debug_output.clone()),
    ]
}

/// `key=value` lines; multi-line values are written with their newlines escaped
pub fn render_text(result: &VersionResult) -> String {
    output_pairs(result)
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value.replace('\n', "\\n")))
        .collect()
}

pub fn render_json(result: &VersionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Append outputs to a GitHub Actions output file.
///
/// Multi-line values use the heredoc form GitHub expects.
pub fn write_github_output(path: &Path, result: &VersionResult) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (key, value) in output_pairs(result) {
        if value.contains('\n') {
            let delimiter = format!("ghadelimiter_{}", key.to_uppercase());
            writeln!(file, "{}<<{}\n{}\n{}", key, delimiter, value, delimiter)?;
        } else {
            writeln!(file, "{}={}", key, value)?;
        }
    }
    Ok(())
}

/// Short colored summary for people reading the CI log
pub fn print_summary(result: &VersionResult) {
    if !result.changed {
        eprintln!("{} No changes detected for this commit", style("→").yellow());
    }
    eprintln!(
        "{} Version is {}",
        style("✓").green(),
        style(&result.formatted_version).bold()
    );
    if let Ok(repository) = std::env::var("GITHUB_REPOSITORY") {
        eprintln!(
            "{} To create a release for this version, go to https://github.com/{}/releases/new?tag={}&target={}",
            style("→").yellow(),
            repository,
            result.version_tag,
            result.current_commit
        );
    }
}
