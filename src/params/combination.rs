//! Directive/layer compatibility table.

use crate::profile::ConfigProfileName;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Layer entry that makes a directive compatible with every layer.
pub const ANY_LAYER: &str = "*";

/// Error returned when a directive/layer pair is not listed for a profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "layer '{layer}' is not supported for directive '{directive}' in profile '{profile}' (allowed: {})",
    format_allowed(.allowed)
)]
pub struct CombinationError {
    pub directive: String,
    pub layer: String,
    pub profile: ConfigProfileName,
    /// Layers the directive is listed with, for the error message.
    pub allowed: Vec<String>,
}

fn format_allowed(allowed: &[String]) -> String {
    if allowed.is_empty() {
        "none".to_string()
    } else {
        allowed.join(", ")
    }
}

/// Which layers each directive may be combined with.
///
/// A pair is compatible only if it is listed. Listing [`ANY_LAYER`] for a
/// directive accepts every layer that passed the layer pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationTable {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl CombinationTable {
    /// An empty table (no pair is compatible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `directive -> layers` entries.
    pub fn from_entries<I, D, L, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (D, L)>,
        D: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (directive, layers) in entries {
            let set = table.entries.entry(directive.into()).or_default();
            set.extend(layers.into_iter().map(Into::into));
        }
        table
    }

    /// Add one compatible pair.
    pub fn allow(mut self, directive: impl Into<String>, layer: impl Into<String>) -> Self {
        self.entries
            .entry(directive.into())
            .or_default()
            .insert(layer.into());
        self
    }

    pub fn is_compatible(&self, directive: &str, layer: &str) -> bool {
        self.entries
            .get(directive)
            .is_some_and(|layers| layers.contains(layer) || layers.contains(ANY_LAYER))
    }

    /// Layers listed for a directive, in sorted order.
    pub fn layers_for(&self, directive: &str) -> Vec<String> {
        self.entries
            .get(directive)
            .map(|layers| layers.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Check a pair, producing a descriptive error when it is not listed.
    pub fn check(
        &self,
        directive: &str,
        layer: &str,
        profile: &ConfigProfileName,
    ) -> Result<(), CombinationError> {
        if self.is_compatible(directive, layer) {
            Ok(())
        } else {
            Err(CombinationError {
                directive: directive.to_string(),
                layer: layer.to_string(),
                profile: profile.clone(),
                allowed: self.layers_for(directive),
            })
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
