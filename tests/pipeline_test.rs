// tests/pipeline_test.rs
use semantic_version::config::Config;
use semantic_version::domain::VersionBumpKind;
use semantic_version::git::MockRepository;
use semantic_version::{run_action, SemanticVersionError};

fn repo_with(messages: &[&str]) -> MockRepository {
    let mut repo = MockRepository::new();
    for message in messages {
        repo.commit(message, "Ann", "ann@example.com");
    }
    repo
}

#[test]
fn test_release_cycle_minor() {
    let mut repo = repo_with(&["initial"]);
    repo.tag_head("v1.2.3");
    repo.commit("fix: x", "Ann", "ann@example.com");
    repo.commit("feat: y", "Ann", "ann@example.com");

    let config = Config {
        minor_pattern: "feat:".to_string(),
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.version_type, VersionBumpKind::Minor);
    assert_eq!((result.major, result.minor, result.patch), (1, 3, 0));
    assert!(result.changed);
    assert_eq!(result.formatted_version, "1.3.0");
    assert_eq!(result.version_tag, "v1.3.0");
    assert_eq!(result.previous_version, "1.2.3");
}

#[test]
fn test_continuous_new_repository_gets_first_patch() {
    let repo = repo_with(&["chore: scaffolding"]);
    let config = Config {
        bump_each_commit: true,
        bump_each_commit_patch_pattern: "fix:".to_string(),
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.version_type, VersionBumpKind::Patch);
    assert_eq!(result.formatted_version, "0.0.1");
    assert!(result.changed);
}

#[test]
fn test_continuous_current_commit_tagged() {
    let mut repo = repo_with(&["a", "b (MAJOR)"]);
    repo.tag_head("v2.0.0");

    let config = Config {
        bump_each_commit: true,
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.version_type, VersionBumpKind::None);
    assert!(!result.changed);
    assert!(result.is_tagged);
    assert_eq!(result.formatted_version, "2.0.0");
}

#[test]
fn test_version_format_with_increment() {
    let mut repo = repo_with(&["initial"]);
    repo.tag_head("v1.0.0");
    repo.commit("feature (MINOR)", "Ann", "ann@example.com");
    repo.commit("docs", "Ann", "ann@example.com");
    repo.commit("more docs", "Ann", "ann@example.com");

    let config = Config {
        version_format: "{major}.{minor}.{patch}-prerelease.{increment}".to_string(),
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.formatted_version, "1.1.0-prerelease.2");
    assert_eq!(result.increment, 2);
}

#[test]
fn test_namespace_in_tag_output() {
    let mut repo = repo_with(&["initial"]);
    repo.tag_head("v0.4.0-web");
    repo.commit("feature (MINOR)", "Ann", "ann@example.com");

    let config = Config {
        namespace: "web".to_string(),
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.previous_version, "0.4.0");
    assert_eq!(result.version_tag, "v0.5.0-web");
}

#[test]
fn test_json_author_output() {
    let mut repo = MockRepository::new();
    repo.commit("a", "Al", "al@x");
    repo.commit("b", "Bea", "bea@x");
    repo.commit("c", "Bea", "bea@x");

    let config = Config {
        user_format_type: "json".to_string(),
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    let authors: serde_json::Value = serde_json::from_str(&result.authors).unwrap();
    assert_eq!(authors[0]["name"], "Bea");
    assert_eq!(authors[0]["commits"], 2);
    assert_eq!(authors[1]["name"], "Al");
}

#[test]
fn test_history_failure_propagates() {
    let mut repo = repo_with(&["initial", "fix"]);
    repo.break_history();

    let err = run_action(&repo, &Config::default()).unwrap_err();
    assert!(matches!(err, SemanticVersionError::Git(_)));
}

#[test]
fn test_unknown_user_format_rejected() {
    let repo = repo_with(&["initial"]);
    let config = Config {
        user_format_type: "xml".to_string(),
        ..Config::default()
    };
    let err = run_action(&repo, &config).unwrap_err();
    assert!(matches!(err, SemanticVersionError::Config(_)));
}

#[test]
fn test_prerelease_mode() {
    let mut repo = repo_with(&["initial"]);
    repo.tag_head("v0.9.0");
    repo.commit("rewrite (MAJOR)", "Ann", "ann@example.com");

    let config = Config {
        enable_prerelease_mode: true,
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.formatted_version, "0.10.0");
    assert_eq!(result.version_type, VersionBumpKind::Major);
}

#[test]
fn test_release_at_numeric_limit_is_an_error() {
    let mut repo = repo_with(&["initial"]);
    repo.tag_head("v18446744073709551615.0.0");
    repo.commit("drop v1 (MAJOR)", "Ann", "ann@example.com");

    let err = run_action(&repo, &Config::default()).unwrap_err();
    assert!(matches!(err, SemanticVersionError::Version(_)));
}

#[test]
fn test_continuous_patch_pattern_matches_body() {
    let mut repo = repo_with(&["initial"]);
    repo.tag_head("v1.0.0");
    repo.commit("chore: x\n\nfix: real", "Ann", "ann@example.com");

    let config = Config {
        bump_each_commit: true,
        bump_each_commit_patch_pattern: "fix:".to_string(),
        search_commit_body: true,
        ..Config::default()
    };
    let result = run_action(&repo, &config).unwrap();

    assert_eq!(result.version_type, VersionBumpKind::Patch);
    assert_eq!(result.formatted_version, "1.0.1");
}
