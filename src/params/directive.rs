//! The directive token: the action half of a two-token command.

use super::pattern::{TypePattern, ValueRejection, check_value};
use crate::profile::ConfigProfileName;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Maximum directive length after trimming.
pub const MAX_DIRECTIVE_LEN: usize = 20;

/// Error returned when a raw directive fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("directive must not be empty")]
    EmptyInput,

    #[error("directive '{value}' is too long ({length} characters, maximum {max})")]
    TooLong {
        value: String,
        length: usize,
        max: usize,
    },

    #[error(
        "directive '{value}' does not match pattern '{pattern_source}' for profile '{profile}'"
    )]
    PatternMismatch {
        value: String,
        profile: ConfigProfileName,
        pattern_source: String,
    },
}

/// A validated directive, bound to the profile it was validated under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectiveType {
    value: String,
    profile: ConfigProfileName,
}

impl DirectiveType {
    /// Validate a raw directive against the profile's directive pattern.
    pub fn create(
        raw: &str,
        profile: &ConfigProfileName,
        pattern: &TypePattern,
    ) -> Result<Self, DirectiveError> {
        match check_value(raw, MAX_DIRECTIVE_LEN, pattern) {
            Ok(value) => Ok(Self {
                value,
                profile: profile.clone(),
            }),
            Err(ValueRejection::Empty) => Err(DirectiveError::EmptyInput),
            Err(ValueRejection::TooLong { length }) => Err(DirectiveError::TooLong {
                value: raw.trim().to_string(),
                length,
                max: MAX_DIRECTIVE_LEN,
            }),
            Err(ValueRejection::Mismatch) => Err(DirectiveError::PatternMismatch {
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
}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for DirectiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
