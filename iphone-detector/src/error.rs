//! Detection error types.

use thiserror::Error;

/// Errors raised while classifying a display environment.
///
/// Non-iPhone environments and ambiguous matches are not errors; they are
/// reported as `None` or as a list with zero or several models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// The identification string claims to be an iPhone but carries no
    /// `OS <major>_<minor>` version token.
    #[error("iPhone user agent has no OS version: {user_agent}")]
    MissingOsVersion { user_agent: String },

    /// A version component was captured but does not fit an integer.
    #[error("Invalid OS version component: {component}")]
    InvalidOsVersion { component: String },
}

/// Convenience alias for detection results.
pub type Result<T> = std::result::Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_os_version_display() {
        let err = DetectError::MissingOsVersion {
            user_agent: "Mozilla/5.0 (iPhone)".to_string(),
        };
        assert!(err.to_string().contains("no OS version"));
        assert!(err.to_string().contains("Mozilla/5.0 (iPhone)"));
    }
}
