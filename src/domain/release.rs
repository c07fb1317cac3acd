use super::version::Version;
use serde::Serialize;

/// The most recent release reachable from the current commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LastRelease {
    /// Commit carrying the release tag; `None` when nothing was ever released
    pub hash: Option<String>,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Whether the current commit carries a release tag
    pub is_tagged: bool,
    /// Version tagged on the current commit itself, if any
    pub current: Option<Version>,
}

impl LastRelease {
    /// Release `0.0.0` with no commit behind it
    pub fn none() -> Self {
        LastRelease::default()
    }

    /// A release found at `hash`, not on the current commit
    pub fn at(hash: impl Into<String>, version: Version) -> Self {
        LastRelease {
            hash: Some(hash.into()),
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            is_tagged: false,
            current: None,
        }
    }

    /// A release tagged on the current commit
    pub fn tagged_current(hash: impl Into<String>, version: Version) -> Self {
        LastRelease {
            is_tagged: true,
            current: Some(version),
            ..LastRelease::at(hash, version)
        }
    }

    pub fn version(&self) -> Version {
        Version::new(self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_zero_release() {
        let release = LastRelease::none();
        assert_eq!(release.hash, None);
        assert!(release.version().is_zero());
        assert!(!release.is_tagged);
        assert_eq!(release.current, None);
    }

    #[test]
    fn test_tagged_current_sets_current_version() {
        let release = LastRelease::tagged_current("abc", Version::new(2, 0, 0));
        assert!(release.is_tagged);
        assert_eq!(release.current, Some(Version::new(2, 0, 0)));
        assert_eq!(release.version(), Version::new(2, 0, 0));
        assert_eq!(release.hash.as_deref(), Some("abc"));
    }
}
