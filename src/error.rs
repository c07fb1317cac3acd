use thiserror::Error;

/// Unified error type for semantic-version operations
#[derive(Error, Debug)]
pub enum SemanticVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semantic-version
pub type Result<T> = std::result::Result<T, SemanticVersionError>;

impl SemanticVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemanticVersionError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        SemanticVersionError::Pattern(msg.into())
    }

    /// Create a version arithmetic error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SemanticVersionError::Version(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SemanticVersionError::config("unknown user format 'xml'");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown user format 'xml'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SemanticVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git() {
        let git_err = git2::Error::from_str("object not found");
        let err: SemanticVersionError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("object not found"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (SemanticVersionError::config("x"), "Configuration error"),
            (SemanticVersionError::pattern("x"), "Invalid pattern"),
            (SemanticVersionError::version("x"), "Version error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
