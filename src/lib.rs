pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod git;
pub mod pattern;

pub use cli::{run_action, VersionResult};
pub use error::{Result, SemanticVersionError};
