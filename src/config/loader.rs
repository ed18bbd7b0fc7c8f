//! Profile config discovery and app/user merging.
//!
//! For a profile `p`, the loader reads `{config_dir}/p-app.yml` and then
//! `{config_dir}/p-user.yml`, deep-merging the user file over the app file.
//! Mappings merge key by key; any other value is replaced wholesale.

use super::error::ConfigError;
use super::model::ProfileConfig;
use crate::profile::ConfigProfileName;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config directory relative to the working directory.
pub const CONFIG_DIR_NAME: &str = "config";

/// Supplies the configuration for a validated profile.
pub trait ProfileConfigSource {
    fn profile_config(&self, profile: &ConfigProfileName) -> Result<ProfileConfig, ConfigError>;
}

/// A fixed config serves every profile.
impl ProfileConfigSource for ProfileConfig {
    fn profile_config(&self, _profile: &ConfigProfileName) -> Result<ProfileConfig, ConfigError> {
        Ok(self.clone())
    }
}

/// Loads profile configs from YAML files in one directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Loader for the default layout: `{cwd}/.agent/breakdown/config`.
    pub fn for_cwd(cwd: &Path) -> Self {
        Self::new(
            cwd.join(super::types::DEFAULT_WORKING_DIR)
                .join(CONFIG_DIR_NAME),
        )
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_config_path(&self, profile: &ConfigProfileName) -> PathBuf {
        self.config_dir.join(format!("{}-app.yml", profile))
    }

    pub fn user_config_path(&self, profile: &ConfigProfileName) -> PathBuf {
        self.config_dir.join(format!("{}-user.yml", profile))
    }

    /// Load and merge the config files for `profile`.
    ///
    /// # Returns
    ///
    /// * `Ok(ProfileConfig)` - merged and validated config; built-in defaults
    ///   when the `default` profile has no files
    /// * `Err(ConfigError::ProfileNotFound)` - a non-default profile has no files
    /// * `Err(ConfigError)` - a file could not be read, parsed, or validated
    pub fn load(&self, profile: &ConfigProfileName) -> Result<ProfileConfig, ConfigError> {
        let app_path = self.app_config_path(profile);
        let user_path = self.user_config_path(profile);

        let app = read_yaml_if_exists(&app_path)?;
        let user = read_yaml_if_exists(&user_path)?;

        debug!(
            profile = %profile,
            app = %app_path.display(),
            app_found = app.is_some(),
            user = %user_path.display(),
            user_found = user.is_some(),
            "loading profile config"
        );

        let merged = match (app, user) {
            (None, None) if profile.is_default() => return Ok(ProfileConfig::default()),
            (None, None) => {
                return Err(ConfigError::ProfileNotFound {
                    profile: profile.to_string(),
                    config_dir: self.config_dir.clone(),
                });
            }
            (Some(app), None) => app,
            (None, Some(user)) => user,
            (Some(mut app), Some(user)) => {
                merge_yaml(&mut app, user);
                app
            }
        };

        ProfileConfig::from_value(merged, &format!("profile '{}'", profile))
    }
}

impl ProfileConfigSource for ConfigLoader {
    fn profile_config(&self, profile: &ConfigProfileName) -> Result<ProfileConfig, ConfigError> {
        self.load(profile)
    }
}

fn read_yaml_if_exists(path: &Path) -> Result<Option<Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(value))
}

/// Deep-merge `overlay` into `base`. Mappings merge recursively; anything else replaces.
pub(crate) fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_yaml(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // An empty user file leaves the app config untouched.
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
