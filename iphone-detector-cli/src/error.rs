//! CLI error types.

use std::fmt;

use iphone_detector::environment::ProfileError;
use iphone_detector::DetectError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Failed to load or save an environment profile.
    Profile(ProfileError),

    /// The environment could not be classified.
    Detect(DetectError),

    /// Invalid combination of arguments or missing configuration.
    Config(String),

    /// I/O error reading input or creating directories.
    Io(std::io::Error),

    /// Failed to serialize output.
    Output(serde_json::Error),

    /// Failed to create the Tokio runtime or install the signal handler.
    Runtime(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Profile(e) => write!(f, "Environment profile error: {}", e),
            CliError::Detect(e) => write!(f, "Unable to identify device: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
            CliError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Profile(e) => Some(e),
            CliError::Detect(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::Config(_) | CliError::Runtime(_) => None,
        }
    }
}

impl From<ProfileError> for CliError {
    fn from(e: ProfileError) -> Self {
        CliError::Profile(e)
    }
}

impl From<DetectError> for CliError {
    fn from(e: DetectError) -> Self {
        CliError::Detect(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_error_display() {
        let err: CliError = DetectError::MissingOsVersion {
            user_agent: "iPhone".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Unable to identify device"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("--landscape requires --model".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(std::error::Error::source(&err).is_none());
    }
}
