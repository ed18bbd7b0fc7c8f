//! Merging standard and custom variables.

use super::types::{STANDARD_VARIABLE_NAMES, VariableError, VariableSet};
use crate::config::types::DEFAULT_CUSTOM_VARIABLE_PREFIX;
use std::collections::BTreeMap;
use tracing::debug;

/// Validates custom variables and merges them with the standard set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAssembler {
    prefix: String,
}

impl Default for VariableAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOM_VARIABLE_PREFIX)
    }
}

impl VariableAssembler {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Merge `standard` with the user-supplied `custom_raw` variables.
    ///
    /// Every custom key is checked and every rejection is collected; nothing
    /// is dropped silently. Per key:
    ///
    /// - missing prefix -> `InvalidPrefix` (no further checks for that key)
    /// - nothing after the prefix -> `EmptyName`
    /// - blank value -> `EmptyValue`
    /// - un-prefixed name is standard or reserved -> `ReservedName`
    ///
    /// # Returns
    ///
    /// * `Ok(VariableSet)` - all custom variables accepted
    /// * `Err(Vec<VariableError>)` - every rejection, in key order
    pub fn assemble(
        &self,
        standard: BTreeMap<String, String>,
        custom_raw: &BTreeMap<String, String>,
    ) -> Result<VariableSet, Vec<VariableError>> {
        let mut errors = Vec::new();
        let mut custom = BTreeMap::new();

        for (key, value) in custom_raw {
            let Some(name) = key.strip_prefix(self.prefix.as_str()) else {
                errors.push(VariableError::InvalidPrefix {
                    key: key.clone(),
                    prefix: self.prefix.clone(),
                });
                continue;
            };

            let mut accepted = true;

            if name.is_empty() {
                errors.push(VariableError::EmptyName {
                    key: key.clone(),
                    prefix: self.prefix.clone(),
                });
                accepted = false;
            }

            if value.trim().is_empty() {
                errors.push(VariableError::EmptyValue { key: key.clone() });
                accepted = false;
            }

            if !name.is_empty() && is_reserved(name, &standard) {
                errors.push(VariableError::ReservedName {
                    key: key.clone(),
                    name: name.to_string(),
                });
                accepted = false;
            }

            if accepted {
                custom.insert(name.to_string(), value.clone());
            }
        }

        debug!(
            standard = standard.len(),
            custom = custom.len(),
            rejected = errors.len(),
            "assembled variables"
        );

        if errors.is_empty() {
            Ok(VariableSet::new(standard, custom))
        } else {
            Err(errors)
        }
    }
}

fn is_reserved(name: &str, standard: &BTreeMap<String, String>) -> bool {
    STANDARD_VARIABLE_NAMES.contains(&name) || standard.contains_key(name)
}
