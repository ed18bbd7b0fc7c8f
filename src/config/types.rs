//! Configuration sections and their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub(crate) const DEFAULT_WORKING_DIR: &str = ".agent/breakdown";
pub(crate) const DEFAULT_PROMPT_BASE_DIR: &str = "prompts";
pub(crate) const DEFAULT_SCHEMA_BASE_DIR: &str = "schema";
pub(crate) const DEFAULT_DIRECTIVE_PATTERN: &str = "to|summary|defect";
pub(crate) const DEFAULT_LAYER_PATTERN: &str = "project|issue|task";
pub(crate) const DEFAULT_CUSTOM_VARIABLE_PREFIX: &str = "uv-";
pub(crate) const DEFAULT_STDIN_TIMEOUT_MS: u64 = 30_000;

pub(crate) fn default_working_dir() -> String {
    DEFAULT_WORKING_DIR.to_string()
}
pub(crate) fn default_prompt_base_dir() -> String {
    DEFAULT_PROMPT_BASE_DIR.to_string()
}
pub(crate) fn default_schema_base_dir() -> String {
    DEFAULT_SCHEMA_BASE_DIR.to_string()
}
pub(crate) fn default_directive_pattern() -> String {
    DEFAULT_DIRECTIVE_PATTERN.to_string()
}
pub(crate) fn default_layer_pattern() -> String {
    DEFAULT_LAYER_PATTERN.to_string()
}
pub(crate) fn default_custom_variable_prefix() -> String {
    DEFAULT_CUSTOM_VARIABLE_PREFIX.to_string()
}
pub(crate) fn default_stdin_timeout_ms() -> u64 {
    DEFAULT_STDIN_TIMEOUT_MS
}

/// Every default directive combined with every default layer.
pub fn default_combinations() -> BTreeMap<String, Vec<String>> {
    let layers = ["project", "issue", "task"];
    ["to", "summary", "defect"]
        .into_iter()
        .map(|directive| {
            (
                directive.to_string(),
                layers.iter().map(|l| l.to_string()).collect(),
            )
        })
        .collect()
}

/// A base directory setting (`app_prompt`, `app_schema`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseDirConfig {
    pub base_dir: String,
}

impl BaseDirConfig {
    pub(crate) fn prompts() -> Self {
        Self {
            base_dir: default_prompt_base_dir(),
        }
    }

    pub(crate) fn schema() -> Self {
        Self {
            base_dir: default_schema_base_dir(),
        }
    }
}

/// A `pattern:` entry for directive or layer validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub pattern: String,
}

/// `params:` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub two: TwoParamsConfig,
}

/// `params.two:` section: directive/layer patterns and their combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoParamsConfig {
    #[serde(rename = "directiveType")]
    pub directive_type: PatternConfig,

    #[serde(rename = "layerType")]
    pub layer_type: PatternConfig,

    /// Directive to compatible layers. `"*"` accepts any layer.
    #[serde(default = "default_combinations")]
    pub combinations: BTreeMap<String, Vec<String>>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for TwoParamsConfig {
    fn default() -> Self {
        Self {
            directive_type: PatternConfig {
                pattern: default_directive_pattern(),
            },
            layer_type: PatternConfig {
                pattern: default_layer_pattern(),
            },
            combinations: default_combinations(),
            extra: BTreeMap::new(),
        }
    }
}

/// `options:` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    pub destination: DestinationConfig,

    #[serde(rename = "customVariables")]
    pub custom_variables: CustomVariablesConfig,

    pub stdin: StdinConfig,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// `options.destination:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationConfig {
    /// Destination template used when no explicit destination is given,
    /// e.g. `dest/{yyyy}/{mm}/{branch}.md`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// `options.customVariables:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomVariablesConfig {
    /// Prefix every custom variable key must carry.
    pub prefix: String,
}

impl Default for CustomVariablesConfig {
    fn default() -> Self {
        Self {
            prefix: default_custom_variable_prefix(),
        }
    }
}

/// `options.stdin:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StdinConfig {
    /// How long to wait for piped input before giving up.
    pub timeout_ms: u64,
}

impl Default for StdinConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_stdin_timeout_ms(),
        }
    }
}
