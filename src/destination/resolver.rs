//! Destination path derivation.

use super::placeholder::{PlaceholderValues, expand_placeholders};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where output should go, as derived from the invocation.
///
/// `Absent` is an explicit outcome: it means no `destination_path` variable
/// is produced downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum DestinationPath {
    /// An absolute explicit destination, used unchanged.
    Absolute(PathBuf),
    /// Derived from a relative explicit destination or the configured prefix,
    /// joined onto `cwd/working_dir`.
    Relative(PathBuf),
    Absent,
}

impl DestinationPath {
    pub fn path(&self) -> Option<&Path> {
        match self {
            DestinationPath::Absolute(path) | DestinationPath::Relative(path) => Some(path),
            DestinationPath::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DestinationPath::Absent)
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            DestinationPath::Absolute(path) | DestinationPath::Relative(path) => Some(path),
            DestinationPath::Absent => None,
        }
    }
}

/// Destination resolution failure.
///
/// Resolution is currently total, so this type has no values. It exists so
/// callers can match on a destination stage that may fail in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationResolutionError {}

impl fmt::Display for DestinationResolutionError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for DestinationResolutionError {}

/// Inputs to destination resolution.
#[derive(Debug, Clone, Copy)]
pub struct DestinationSpec<'a> {
    /// The `-o/--destination` value, if given. Blank counts as absent.
    pub explicit: Option<&'a str>,
    pub working_dir: &'a Path,
    pub cwd: &'a Path,
    /// The `options.destination.prefix` template, if configured.
    pub prefix: Option<&'a str>,
}

impl DestinationSpec<'_> {
    /// Apply the resolution rules in order; the first match wins.
    ///
    /// 1. absolute explicit path -> `Absolute(explicit)`
    /// 2. relative explicit path -> `Relative(cwd/working_dir/explicit)`
    /// 3. configured prefix -> `Relative(cwd/working_dir/expanded prefix)`
    /// 4. otherwise -> `Absent`
    ///
    /// No filesystem access is performed.
    pub fn resolve(&self, values: &PlaceholderValues) -> DestinationPath {
        let explicit = self.explicit.map(str::trim).filter(|p| !p.is_empty());
        let prefix = self.prefix.filter(|p| !p.trim().is_empty());

        let resolved = match (explicit, prefix) {
            (Some(explicit), _) if Path::new(explicit).is_absolute() => {
                DestinationPath::Absolute(PathBuf::from(explicit))
            }
            (Some(explicit), _) => DestinationPath::Relative(self.base().join(explicit)),
            (None, Some(prefix)) => {
                let expanded = expand_placeholders(prefix, values);
                DestinationPath::Relative(self.base().join(expanded))
            }
            (None, None) => DestinationPath::Absent,
        };

        debug!(
            explicit = ?self.explicit,
            prefix = ?self.prefix,
            resolved = ?resolved,
            "resolved destination"
        );

        resolved
    }

    fn base(&self) -> PathBuf {
        self.cwd.join(self.working_dir)
    }
}

/// Resolve a destination without building a [`DestinationSpec`] first.
pub fn resolve_destination(
    explicit: Option<&str>,
    working_dir: &Path,
    cwd: &Path,
    prefix: Option<&str>,
    values: &PlaceholderValues,
) -> DestinationPath {
    DestinationSpec {
        explicit,
        working_dir,
        cwd,
        prefix,
    }
    .resolve(values)
}
