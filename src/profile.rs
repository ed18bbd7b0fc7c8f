//! Configuration profile names.
//!
//! A profile selects which `{profile}-app.yml` / `{profile}-user.yml` pair is
//! loaded and scopes every directive and layer validated under it.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Profile used when no `--config` override is given.
pub const DEFAULT_PROFILE: &str = "default";

/// Maximum length of a profile name.
pub const MAX_PROFILE_NAME_LEN: usize = 50;

/// Error returned when a profile name is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The name is empty, too long, or contains characters outside `[a-zA-Z0-9_-]`.
    #[error(
        "invalid profile name '{value}': expected 1-{max} characters of [a-zA-Z0-9_-]",
        max = MAX_PROFILE_NAME_LEN
    )]
    EmptyOrInvalidFormat { value: String },
}

/// A validated profile identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigProfileName(String);

impl ConfigProfileName {
    /// Validate a raw profile name.
    ///
    /// `None` yields the [`DEFAULT_PROFILE`]. A present value must match
    /// `^[a-zA-Z0-9_-]{1,50}$`; it is not trimmed.
    pub fn create(raw: Option<&str>) -> Result<Self, ProfileError> {
        let Some(raw) = raw else {
            return Ok(Self::default_profile());
        };

        if is_valid_profile_name(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ProfileError::EmptyOrInvalidFormat {
                value: raw.to_string(),
            })
        }
    }

    /// The `default` profile.
    pub fn default_profile() -> Self {
        Self(DEFAULT_PROFILE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_PROFILE
    }
}

impl Default for ConfigProfileName {
    fn default() -> Self {
        Self::default_profile()
    }
}

impl fmt::Display for ConfigProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ConfigProfileName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

fn is_valid_profile_name(raw: &str) -> bool {
    let len = raw.chars().count();
    (1..=MAX_PROFILE_NAME_LEN).contains(&len)
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
