use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use semantic_version::cli::output;
use semantic_version::config::{self, Config};
use semantic_version::git::Git2Repository;

#[derive(clap::Parser)]
#[command(
    name = "semantic-version",
    version,
    about = "Compute a semantic version from git history and release tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    path: PathBuf,

    #[arg(short, long, env = "SEMVER_BRANCH", help = "Branch or revision to version")]
    branch: Option<String>,

    #[arg(long, env = "SEMVER_TAG_PREFIX", help = "Prefix of release tags")]
    tag_prefix: Option<String>,

    #[arg(long, env = "SEMVER_MAJOR_PATTERN", help = "Pattern marking a major change")]
    major_pattern: Option<String>,

    #[arg(long, env = "SEMVER_MAJOR_FLAGS", help = "Regex flags for the major pattern")]
    major_flags: Option<String>,

    #[arg(long, env = "SEMVER_MINOR_PATTERN", help = "Pattern marking a minor change")]
    minor_pattern: Option<String>,

    #[arg(long, env = "SEMVER_MINOR_FLAGS", help = "Regex flags for the minor pattern")]
    minor_flags: Option<String>,

    #[arg(long, env = "SEMVER_VERSION_FORMAT", help = "Template for the version output")]
    version_format: Option<String>,

    #[arg(long, env = "SEMVER_NAMESPACE", help = "Namespace suffix for release tags")]
    namespace: Option<String>,

    #[arg(
        long,
        env = "SEMVER_BUMP_EACH_COMMIT",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Bump the patch number on every commit"
    )]
    bump_each_commit: Option<bool>,

    #[arg(
        long,
        env = "SEMVER_BUMP_EACH_COMMIT_PATCH_PATTERN",
        help = "Only commits matching this pattern bump the patch in continuous mode"
    )]
    bump_each_commit_patch_pattern: Option<String>,

    #[arg(
        long,
        env = "SEMVER_SEARCH_COMMIT_BODY",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Match patterns against the commit body too"
    )]
    search_commit_body: Option<bool>,

    #[arg(long, env = "SEMVER_USER_FORMAT_TYPE", help = "Author output format: csv or json")]
    user_format_type: Option<String>,

    #[arg(
        long,
        env = "SEMVER_ENABLE_PRERELEASE_MODE",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Keep major at 0 until 1.0.0 is tagged"
    )]
    enable_prerelease_mode: Option<bool>,

    #[arg(long, env = "SEMVER_CHANGE_PATH", help = "Only count commits touching these paths")]
    change_path: Option<String>,

    #[arg(
        long,
        env = "SEMVER_DEBUG",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Include diagnostic data in the output"
    )]
    debug: Option<bool>,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,

    #[arg(short, long, help = "Verbose logging on stderr")]
    verbose: bool,
}

impl Args {
    /// Command line values take precedence over the configuration file
    fn apply(self, mut config: Config) -> Config {
        let overrides = [
            (self.branch, &mut config.branch),
            (self.tag_prefix, &mut config.tag_prefix),
            (self.major_pattern, &mut config.major_pattern),
            (self.major_flags, &mut config.major_flags),
            (self.minor_pattern, &mut config.minor_pattern),
            (self.minor_flags, &mut config.minor_flags),
            (self.version_format, &mut config.version_format),
            (self.namespace, &mut config.namespace),
            (
                self.bump_each_commit_patch_pattern,
                &mut config.bump_each_commit_patch_pattern,
            ),
            (self.user_format_type, &mut config.user_format_type),
            (self.change_path, &mut config.change_path),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }

        let switches = [
            (self.bump_each_commit, &mut config.bump_each_commit),
            (self.search_commit_body, &mut config.search_commit_body),
            (self.enable_prerelease_mode, &mut config.enable_prerelease_mode),
            (self.debug, &mut config.debug),
        ];
        for (value, slot) in switches {
            if let Some(value) = value {
                *slot = value;
            }
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // stdout carries the computed outputs, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    let json = args.json;
    let path = args.path.clone();
    let config = args.apply(file_config);
    debug!(?config, "effective configuration");

    let repo = Git2Repository::open(&path)
        .with_context(|| format!("Not in a git repository: {}", path.display()))?
        .with_branch(config.branch.as_str())
        .with_change_paths(config.change_paths());

    let result = semantic_version::run_action(&repo, &config).context("Failed to compute version")?;

    if json {
        println!("{}", output::render_json(&result)?);
    } else {
        print!("{}", output::render_text(&result));
    }

    if let Some(github_output) = std::env::var_os("GITHUB_OUTPUT") {
        output::write_github_output(Path::new(&github_output), &result)
            .context("Failed to write GITHUB_OUTPUT")?;
    }
    output::print_summary(&result);

    Ok(())
}
