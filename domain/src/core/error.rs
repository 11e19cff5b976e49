//! Domain error types

use thiserror::Error;

/// Errors raised while assembling the agent at startup.
///
/// These are fatal to bootstrap but never occur while a session is running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    #[error("Missing environment variable {name}: {message}")]
    MissingEnvironment { name: String, message: String },
}

impl ConfigurationError {
    pub fn invalid_setting(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            message: message.into(),
        }
    }
}
