//! Pure formatting of version information into display strings

pub mod tag;
pub mod user;
pub mod version;

pub use tag::TagFormatter;
pub use user::UserFormatter;
pub use version::VersionFormatter;
