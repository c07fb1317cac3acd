//! Domain logic - pure value types independent of git operations

pub mod commit;
pub mod information;
pub mod release;
pub mod version;

pub use commit::{Commit, CommitSet};
pub use information::{UserInfo, VersionInformation};
pub use release::LastRelease;
pub use version::{Version, VersionBumpKind, VersionClassification};
