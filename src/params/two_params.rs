//! The TwoParams aggregate: a validated directive/layer pair.

use super::combination::CombinationError;
use super::directive::{DirectiveError, DirectiveType};
use super::layer::{LayerError, LayerType};
use super::rules::ParamRules;
use crate::profile::ConfigProfileName;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error returned when a two-token command fails validation.
///
/// Each variant keeps the raw input and profile so callers can report the
/// failure without re-running validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwoParamsError {
    #[error("invalid directive: {source}")]
    InvalidDirective {
        value: String,
        profile: ConfigProfileName,
        source: DirectiveError,
    },

    #[error("invalid layer: {source}")]
    InvalidLayer {
        value: String,
        profile: ConfigProfileName,
        source: LayerError,
    },

    #[error("unsupported combination: {source}")]
    UnsupportedCombination {
        directive: String,
        layer: String,
        profile: ConfigProfileName,
        source: CombinationError,
    },
}

/// A directive and layer that are individually valid and listed as
/// compatible for the profile they were validated under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TwoParams {
    directive: DirectiveType,
    layer: LayerType,
    profile: ConfigProfileName,
}

/// Point-in-time snapshot of a command identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub directive: String,
    pub layer: String,
    pub profile: String,
    pub timestamp: DateTime<Utc>,
}

impl TwoParams {
    /// Validate a directive and layer under `profile`.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// directive, then layer, then combination.
    pub fn create(
        directive_raw: &str,
        layer_raw: &str,
        profile: &ConfigProfileName,
        rules: &ParamRules,
    ) -> Result<Self, TwoParamsError> {
        let directive = DirectiveType::create(directive_raw, profile, &rules.directive_pattern)
            .map_err(|source| TwoParamsError::InvalidDirective {
                value: directive_raw.to_string(),
                profile: profile.clone(),
                source,
            })?;

        let layer = LayerType::create(layer_raw, profile, &rules.layer_pattern).map_err(
            |source| TwoParamsError::InvalidLayer {
                value: layer_raw.to_string(),
                profile: profile.clone(),
                source,
            },
        )?;

        rules
            .combinations
            .check(directive.value(), layer.value(), profile)
            .map_err(|source| TwoParamsError::UnsupportedCombination {
                directive: directive.value().to_string(),
                layer: layer.value().to_string(),
                profile: profile.clone(),
                source,
            })?;

        debug!(
            directive = directive.value(),
            layer = layer.value(),
            profile = %profile,
            "validated two params"
        );

        Ok(Self {
            directive,
            layer,
            profile: profile.clone(),
        })
    }

    pub fn directive(&self) -> &DirectiveType {
        &self.directive
    }

    pub fn layer(&self) -> &LayerType {
        &self.layer
    }

    pub fn profile(&self) -> &ConfigProfileName {
        &self.profile
    }

    /// `{base_dir}/{directive}/{layer}`
    pub fn resolve_output_directory(&self, base_dir: &Path) -> PathBuf {
        base_dir
            .join(self.directive.value())
            .join(self.layer.value())
    }

    /// `{base_dir}/{directive}/{layer}/f_{from_layer}[_{adaptation}].md`
    pub fn resolve_prompt_path(
        &self,
        base_dir: &Path,
        from_layer: Option<&str>,
        adaptation: Option<&str>,
    ) -> PathBuf {
        self.resolve_output_directory(base_dir)
            .join(self.layer.prompt_filename(from_layer, adaptation))
    }

    /// `{base_dir}/{directive}/{layer}/{schema file}`
    pub fn resolve_schema_path(&self, base_dir: &Path) -> PathBuf {
        self.resolve_output_directory(base_dir)
            .join(self.layer.schema_filename())
    }

    /// Snapshot of the command identity stamped with the current time.
    pub fn to_command_info(&self) -> CommandInfo {
        CommandInfo {
            directive: self.directive.value().to_string(),
            layer: self.layer.value().to_string(),
            profile: self.profile.to_string(),
            timestamp: Utc::now(),
        }
    }
}
