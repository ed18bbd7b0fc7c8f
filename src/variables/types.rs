//! Variable sets and the errors raised while assembling them.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Stdin contents.
pub const INPUT_TEXT: &str = "input_text";
/// Path of the `--from` input file.
pub const INPUT_TEXT_FILE: &str = "input_text_file";
/// Resolved destination path.
pub const DESTINATION_PATH: &str = "destination_path";
/// Resolved schema path.
pub const SCHEMA_FILE: &str = "schema_file";

/// Standard variable names. These are reserved even when not produced.
pub const STANDARD_VARIABLE_NAMES: [&str; 4] =
    [INPUT_TEXT, INPUT_TEXT_FILE, DESTINATION_PATH, SCHEMA_FILE];

/// A rejected custom variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    #[error("custom variable '{key}' must start with '{prefix}'")]
    InvalidPrefix { key: String, prefix: String },

    #[error("custom variable '{key}' has no name after the '{prefix}' prefix")]
    EmptyName { key: String, prefix: String },

    #[error("custom variable '{key}' has an empty value")]
    EmptyValue { key: String },

    #[error("custom variable '{key}' uses reserved name '{name}'")]
    ReservedName { key: String, name: String },
}

impl VariableError {
    /// The raw key as supplied by the user.
    pub fn key(&self) -> &str {
        match self {
            VariableError::InvalidPrefix { key, .. }
            | VariableError::EmptyName { key, .. }
            | VariableError::EmptyValue { key }
            | VariableError::ReservedName { key, .. } => key,
        }
    }
}

/// Derived variables produced from the resolved command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardVariables {
    pub input_text: Option<String>,
    pub input_text_file: Option<String>,
    pub destination_path: Option<String>,
    pub schema_file: Option<String>,
}

impl StandardVariables {
    /// The produced variables as a name -> value map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        [
            (INPUT_TEXT, self.input_text),
            (INPUT_TEXT_FILE, self.input_text_file),
            (DESTINATION_PATH, self.destination_path),
            (SCHEMA_FILE, self.schema_file),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
    }
}

/// The merged variables handed to template rendering.
///
/// Custom variables are stored without their prefix. No custom name equals
/// a standard or reserved name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableSet {
    standard: BTreeMap<String, String>,
    custom: BTreeMap<String, String>,
}

impl VariableSet {
    pub(crate) fn new(standard: BTreeMap<String, String>, custom: BTreeMap<String, String>) -> Self {
        Self { standard, custom }
    }

    pub fn standard(&self) -> &BTreeMap<String, String> {
        &self.standard
    }

    pub fn custom(&self) -> &BTreeMap<String, String> {
        &self.custom
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.standard
            .get(name)
            .or_else(|| self.custom.get(name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.standard.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.custom.is_empty()
    }

    /// All variables in one map, suitable for template rendering.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        self.standard
            .iter()
            .chain(self.custom.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
