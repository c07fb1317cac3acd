//! Workflow orchestration and output rendering used by the binary

pub mod orchestration;
pub mod output;

pub use orchestration::{run_action, VersionResult};
