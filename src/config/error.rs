//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading, merging, or compiling profile configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("failed to parse config YAML ({source_name}): {message}")]
    Parse { source_name: String, message: String },

    #[error("config validation failed: {0}")]
    Invalid(String),

    #[error(
        "invalid regex in {key}: '{pattern}' - {message}\n\
         Fix: correct the pattern in the profile's app or user config."
    )]
    InvalidPattern {
        key: &'static str,
        pattern: String,
        message: String,
    },

    #[error(
        "profile '{profile}' not found: neither {profile}-app.yml nor {profile}-user.yml exists in '{}'",
        .config_dir.display()
    )]
    ProfileNotFound { profile: String, config_dir: PathBuf },
}
