//! `{name}` placeholder expansion for destination templates.
//!
//! Recognized placeholders:
//!
//! - `{yyyy}`, `{yy}`, `{mm}`, `{dd}` - date parts (zero-padded)
//! - `{hh}`, `{min}`, `{ss}` - time parts (24h, zero-padded)
//! - `{date}` - `yyyymmdd`
//! - `{branch}` - current git branch, with `/` replaced by `-`
//! - `{directive}`, `{layer}`, `{profile}` - the resolved command identity
//!
//! Anything else between braces, a placeholder whose value is unavailable
//! (e.g. `{branch}` outside a repository), and an unterminated `{` are all
//! left in the output verbatim.

use chrono::NaiveDateTime;

/// Values available to placeholder expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderValues {
    pub now: NaiveDateTime,
    pub branch: Option<String>,
    pub directive: Option<String>,
    pub layer: Option<String>,
    pub profile: Option<String>,
}

impl PlaceholderValues {
    /// Values with only the clock set.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now,
            branch: None,
            directive: None,
            layer: None,
            profile: None,
        }
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_command(
        mut self,
        directive: impl Into<String>,
        layer: impl Into<String>,
        profile: impl Into<String>,
    ) -> Self {
        self.directive = Some(directive.into());
        self.layer = Some(layer.into());
        self.profile = Some(profile.into());
        self
    }

    /// The expansion for `name`, or `None` if unknown or unavailable.
    fn lookup(&self, name: &str) -> Option<String> {
        let fmt = |spec: &str| Some(self.now.format(spec).to_string());
        match name {
            "yyyy" => fmt("%Y"),
            "yy" => fmt("%y"),
            "mm" => fmt("%m"),
            "dd" => fmt("%d"),
            "hh" => fmt("%H"),
            "min" => fmt("%M"),
            "ss" => fmt("%S"),
            "date" => fmt("%Y%m%d"),
            "branch" => self.branch.as_deref().map(sanitize_branch),
            "directive" => self.directive.clone(),
            "layer" => self.layer.clone(),
            "profile" => self.profile.clone(),
            _ => None,
        }
    }
}

fn sanitize_branch(branch: &str) -> String {
    branch.trim().replace(['/', '\\'], "-")
}

/// Expand placeholders in `template`.
///
/// A template without placeholders is returned unchanged.
pub fn expand_placeholders(template: &str, values: &PlaceholderValues) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            // Unterminated: keep the remainder as-is.
            result.push_str(&rest[open..]);
            return result;
        };

        let name = &after_open[..close];
        // A nested `{` means this brace is literal; resume scanning at the inner one.
        if let Some(inner) = name.find('{') {
            result.push_str(&rest[open..open + 1 + inner]);
            rest = &after_open[inner..];
            continue;
        }

        match values.lookup(name) {
            Some(value) => result.push_str(&value),
            None => result.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    result.push_str(rest);
    result
}
