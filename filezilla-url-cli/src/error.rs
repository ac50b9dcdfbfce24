//! CLI error type.

use std::fmt;

use filezilla_url::{ConfigError, ResolveError};

/// Errors surfaced by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded.
    Config(ConfigError),

    /// Resolution failed.
    Resolve(ResolveError),

    /// Output could not be rendered.
    Output(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Resolve(e) => e.exit_code(),
            CliError::Output(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Resolve(e) => write!(f, "{}", e),
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Resolve(e) => Some(e),
            CliError::Output(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<ResolveError> for CliError {
    fn from(e: ResolveError) -> Self {
        CliError::Resolve(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filezilla_url::Channel;

    #[test]
    fn test_resolve_error_keeps_exit_code() {
        let err: CliError = ResolveError::NotFound {
            channel: Channel::Beta,
        }
        .into();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("Version or URL not found"));
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::InvalidValue {
            key: "manifest.timeout_secs".to_string(),
            value: "x".to_string(),
            reason: "invalid digit".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert_eq!(err.exit_code(), 2);
    }
}
