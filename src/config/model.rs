//! ProfileConfig struct definition, parsing, and validation.

use super::error::ConfigError;
use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Resolution settings for one profile.
///
/// This struct represents the merged contents of `{profile}-app.yml` and
/// `{profile}-user.yml`. Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Working directory relative to the invocation cwd (default: ".agent/breakdown").
    #[serde(default = "default_working_dir")]
    pub working_dir: String,

    /// Prompt template root, relative to the working directory.
    #[serde(default = "BaseDirConfig::prompts")]
    pub app_prompt: BaseDirConfig,

    /// Schema root, relative to the working directory.
    #[serde(default = "BaseDirConfig::schema")]
    pub app_schema: BaseDirConfig,

    pub params: ParamsConfig,

    pub options: OptionsConfig,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            app_prompt: BaseDirConfig::prompts(),
            app_schema: BaseDirConfig::schema(),
            params: ParamsConfig::default(),
            options: OptionsConfig::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl ProfileConfig {
    /// Parse a profile config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ProfileConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
                source_name: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Build a profile config from an already merged YAML value and validate it.
    pub(crate) fn from_value(value: serde_yaml::Value, source_name: &str) -> Result<Self, ConfigError> {
        // An empty file parses to Null; treat it as an empty mapping.
        let value = match value {
            serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
            other => other,
        };

        let config: ProfileConfig =
            serde_yaml::from_value(value).map_err(|e| ConfigError::Parse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Invalid(format!(
            "failed to serialize config to YAML: {}",
            e
        )))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - directive and layer patterns must be non-empty
    /// - the custom variable prefix must be non-empty
    /// - the stdin timeout must be positive
    /// - combination keys must be non-empty
    ///
    /// Regex compilation is checked separately when the patterns are compiled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let two = &self.params.two;

        if two.directive_type.pattern.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "params.two.directiveType.pattern must not be empty".to_string(),
            ));
        }

        if two.layer_type.pattern.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "params.two.layerType.pattern must not be empty".to_string(),
            ));
        }

        if two.combinations.keys().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "params.two.combinations keys must not be empty".to_string(),
            ));
        }

        if self.options.custom_variables.prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "options.customVariables.prefix must not be empty".to_string(),
            ));
        }

        if self.options.stdin.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "options.stdin.timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Absolute working directory for an invocation from `cwd`.
    pub fn working_dir_in(&self, cwd: &Path) -> std::path::PathBuf {
        cwd.join(&self.working_dir)
    }

    /// Absolute prompt root for an invocation from `cwd`.
    pub fn prompt_base_dir_in(&self, cwd: &Path) -> std::path::PathBuf {
        self.working_dir_in(cwd).join(&self.app_prompt.base_dir)
    }

    /// Absolute schema root for an invocation from `cwd`.
    pub fn schema_base_dir_in(&self, cwd: &Path) -> std::path::PathBuf {
        self.working_dir_in(cwd).join(&self.app_schema.base_dir)
    }

    /// Configured destination template, if any.
    pub fn destination_prefix(&self) -> Option<&str> {
        self.options
            .destination
            .prefix
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    pub fn custom_variable_prefix(&self) -> &str {
        &self.options.custom_variables.prefix
    }

    pub fn stdin_timeout(&self) -> Duration {
        Duration::from_millis(self.options.stdin.timeout_ms)
    }
}
