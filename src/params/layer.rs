//! The layer token: the target-hierarchy half of a two-token command.

use super::combination::CombinationTable;
use super::directive::DirectiveType;
use super::pattern::{TypePattern, ValueRejection, check_value};
use crate::profile::ConfigProfileName;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Maximum layer length after trimming.
pub const MAX_LAYER_LEN: usize = 30;

/// Schema file used for every layer.
pub const BASE_SCHEMA_FILENAME: &str = "base.schema.json";

/// Error returned when a raw layer fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    #[error("layer must not be empty")]
    EmptyInput,

    #[error("layer '{value}' is too long ({length} characters, maximum {max})")]
    TooLong {
        value: String,
        length: usize,
        max: usize,
    },

    #[error("layer '{value}' does not match pattern '{pattern_source}' for profile '{profile}'")]
    PatternMismatch {
        value: String,
        profile: ConfigProfileName,
        pattern_source: String,
    },
}

/// A validated layer, bound to the profile it was validated under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerType {
    value: String,
    profile: ConfigProfileName,
}

impl LayerType {
    /// Validate a raw layer against the profile's layer pattern.
    pub fn create(
        raw: &str,
        profile: &ConfigProfileName,
        pattern: &TypePattern,
    ) -> Result<Self, LayerError> {
        match check_value(raw, MAX_LAYER_LEN, pattern) {
            Ok(value) => Ok(Self {
                value,
                profile: profile.clone(),
            }),
            Err(ValueRejection::Empty) => Err(LayerError::EmptyInput),
            Err(ValueRejection::TooLong { length }) => Err(LayerError::TooLong {
                value: raw.trim().to_string(),
                length,
                max: MAX_LAYER_LEN,
            }),
            Err(ValueRejection::Mismatch) => Err(LayerError::PatternMismatch {
                value: raw.trim().to_string(),
                profile: profile.clone(),
                pattern_source: pattern.source().to_string(),
            }),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn profile(&self) -> &ConfigProfileName {
        &self.profile
    }

    /// Whether the combination table lists this layer for `directive`.
    pub fn is_valid_for_directive(
        &self,
        directive: &DirectiveType,
        combinations: &CombinationTable,
    ) -> bool {
        combinations.is_compatible(directive.value(), &self.value)
    }

    /// Prompt template filename: `f_<from_layer>[_<adaptation>].md`.
    ///
    /// `from_layer` defaults to this layer.
    pub fn prompt_filename(&self, from_layer: Option<&str>, adaptation: Option<&str>) -> String {
        let from_layer = from_layer.unwrap_or(&self.value);
        match adaptation {
            Some(adaptation) => format!("f_{}_{}.md", from_layer, adaptation),
            None => format!("f_{}.md", from_layer),
        }
    }

    /// Schema filename for this layer.
    pub fn schema_filename(&self) -> &'static str {
        BASE_SCHEMA_FILENAME
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for LayerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pattern() -> TypePattern {
        TypePattern::new("project|issue|task").unwrap()
    }

    fn layer(raw: &str) -> LayerType {
        LayerType::create(raw, &ConfigProfileName::default_profile(), &default_pattern()).unwrap()
    }

    #[test]
    fn test_create_valid_layer() {
        assert_eq!(layer("issue").value(), "issue");
        assert_eq!(layer(" task ").value(), "task");
    }

    #[test]
    fn test_empty_layer() {
        let result = LayerType::create(
            "",
            &ConfigProfileName::default_profile(),
            &default_pattern(),
        );
        assert_eq!(result, Err(LayerError::EmptyInput));
    }

    #[test]
    fn test_layer_too_long() {
        let pattern = TypePattern::new("[a-z]+").unwrap();
        let raw = "a".repeat(31);
        let result = LayerType::create(&raw, &ConfigProfileName::default_profile(), &pattern);
        assert!(matches!(
            result,
            Err(LayerError::TooLong { length: 31, max: 30, .. })
        ));
        assert!(
            LayerType::create(&"a".repeat(30), &ConfigProfileName::default_profile(), &pattern)
                .is_ok()
        );
    }

    #[test]
    fn test_layer_pattern_mismatch() {
        let err = LayerType::create(
            "epic",
            &ConfigProfileName::default_profile(),
            &default_pattern(),
        )
        .unwrap_err();
        assert!(matches!(err, LayerError::PatternMismatch { ref value, .. } if value == "epic"));
    }

    #[test]
    fn test_prompt_filename_defaults_to_own_layer() {
        assert_eq!(layer("project").prompt_filename(None, None), "f_project.md");
    }

    #[test]
    fn test_prompt_filename_with_from_layer_and_adaptation() {
        let layer = layer("issue");
        assert_eq!(layer.prompt_filename(Some("task"), None), "f_task.md");
        assert_eq!(
            layer.prompt_filename(Some("project"), Some("strict")),
            "f_project_strict.md"
        );
        assert_eq!(layer.prompt_filename(None, Some("a")), "f_issue_a.md");
    }

    #[test]
    fn test_schema_filename() {
        for raw in ["project", "issue", "task"] {
            assert_eq!(layer(raw).schema_filename(), "base.schema.json");
        }
    }

    #[test]
    fn test_is_valid_for_directive() {
        let directive = DirectiveType::create(
            "defect",
            &ConfigProfileName::default_profile(),
            &TypePattern::new("to|defect").unwrap(),
        )
        .unwrap();
        let table = CombinationTable::new().allow("defect", "task");
        assert!(layer("task").is_valid_for_directive(&directive, &table));
        assert!(!layer("project").is_valid_for_directive(&directive, &table));
    }
}
