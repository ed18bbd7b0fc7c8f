//! Profile configuration for breakdown.
//!
//! This module defines the `ProfileConfig` struct that represents the merged
//! `{profile}-app.yml` / `{profile}-user.yml` pair. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), sensible defaults for optional
//! fields, and validation of config values.

mod error;
mod loader;
mod model;
pub mod types;


// Re-export public API
pub use error::ConfigError;
pub use loader::{CONFIG_DIR_NAME, ConfigLoader, ProfileConfigSource};
pub use model::ProfileConfig;
pub use types::{
    BaseDirConfig, CustomVariablesConfig, DestinationConfig, OptionsConfig, ParamsConfig,
    PatternConfig, StdinConfig, TwoParamsConfig,
};
