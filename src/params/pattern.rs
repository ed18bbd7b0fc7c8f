//! Compiled value patterns for directive and layer validation.

use regex::Regex;

/// A whole-value regex pattern sourced from profile configuration.
///
/// The configured source is always matched against the entire trimmed value:
/// `to|summary` accepts `to` but not `tomato`.
#[derive(Clone)]
pub struct TypePattern {
    regex: Regex,
    source: String,
}

impl std::fmt::Debug for TypePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypePattern").field(&self.source).finish()
    }
}

impl TypePattern {
    /// Compile a pattern from its configured source string.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            regex,
            source: source.to_string(),
        })
    }

    /// The pattern exactly as configured.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Why a raw directive or layer value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueRejection {
    Empty,
    TooLong { length: usize },
    Mismatch,
}

/// Trim, bound, and pattern-check a raw value. Checks run in that order.
pub(crate) fn check_value(
    raw: &str,
    max_len: usize,
    pattern: &TypePattern,
) -> Result<String, ValueRejection> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValueRejection::Empty);
    }

    let length = trimmed.chars().count();
    if length > max_len {
        return Err(ValueRejection::TooLong { length });
    }

    if !pattern.is_match(trimmed) {
        return Err(ValueRejection::Mismatch);
    }

    Ok(trimmed.to_string())
}
