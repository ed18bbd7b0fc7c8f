//! Compiled per-profile validation rules.

use super::combination::CombinationTable;
use super::pattern::TypePattern;
use crate::config::{ConfigError, TwoParamsConfig};

/// Directive/layer patterns and the combination table for one profile.
///
/// Compile once per invocation and pass it explicitly to [`super::TwoParams::create`].
#[derive(Debug, Clone)]
pub struct ParamRules {
    pub directive_pattern: TypePattern,
    pub layer_pattern: TypePattern,
    pub combinations: CombinationTable,
}

impl ParamRules {
    pub fn new(
        directive_pattern: TypePattern,
        layer_pattern: TypePattern,
        combinations: CombinationTable,
    ) -> Self {
        Self {
            directive_pattern,
            layer_pattern,
            combinations,
        }
    }

    /// Compile rules from the `params.two` config section.
    ///
    /// # Returns
    ///
    /// * `Ok(ParamRules)` - Successfully compiled patterns
    /// * `Err(ConfigError::InvalidPattern)` - A pattern failed to compile (config error)
    pub fn from_config(config: &TwoParamsConfig) -> Result<Self, ConfigError> {
        let directive_pattern = compile(
            "params.two.directiveType.pattern",
            &config.directive_type.pattern,
        )?;
        let layer_pattern = compile("params.two.layerType.pattern", &config.layer_type.pattern)?;
        let combinations = CombinationTable::from_entries(
            config
                .combinations
                .iter()
                .map(|(directive, layers)| (directive.clone(), layers.clone())),
        );

        Ok(Self::new(directive_pattern, layer_pattern, combinations))
    }
}

fn compile(key: &'static str, pattern: &str) -> Result<TypePattern, ConfigError> {
    TypePattern::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        key,
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
