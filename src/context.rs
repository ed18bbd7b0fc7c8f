//! Invocation context for breakdown.
//!
//! Captures the environment a resolution runs in: the working directory,
//! the local clock, and the current git branch. Resolution itself never
//! reads the environment; it only sees an `InvocationContext`.

use crate::destination::PlaceholderValues;
use crate::error::{BreakdownError, Result};
use crate::git;
use chrono::{Local, NaiveDateTime};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment snapshot for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Absolute directory the command was invoked from.
    pub cwd: PathBuf,
    /// Local wall-clock time at capture.
    pub now: NaiveDateTime,
    /// Branch checked out in `cwd`, if inside a git repository.
    pub branch: Option<String>,
}

impl InvocationContext {
    /// Capture the context from the process environment.
    ///
    /// # Returns
    ///
    /// * `Ok(InvocationContext)` - cwd, clock, and (best-effort) branch
    /// * `Err(BreakdownError::UserError)` - the cwd cannot be determined
    pub fn capture() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            BreakdownError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::capture_from(cwd))
    }

    /// Capture the context for a known directory.
    pub fn capture_from<P: AsRef<Path>>(cwd: P) -> Self {
        let cwd = cwd.as_ref().to_path_buf();

        // Outside a repository (or without git) there is simply no branch.
        let branch = match git::current_branch(&cwd) {
            Ok(branch) => branch,
            Err(e) => {
                debug!(error = %e, "no git branch available");
                None
            }
        };

        Self {
            cwd,
            now: Local::now().naive_local(),
            branch,
        }
    }

    /// A fully specified context.
    pub fn new(cwd: impl Into<PathBuf>, now: NaiveDateTime, branch: Option<String>) -> Self {
        Self {
            cwd: cwd.into(),
            now,
            branch,
        }
    }

    /// Placeholder values carrying this context's clock and branch.
    pub fn placeholder_values(&self) -> PlaceholderValues {
        PlaceholderValues::at(self.now).with_branch(self.branch.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DirGuard, create_test_repo};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_capture_uses_process_cwd() {
        let temp_dir = create_test_repo();
        let _guard = DirGuard::new(temp_dir.path());

        let ctx = InvocationContext::capture().unwrap();
        assert_eq!(
            ctx.cwd.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
        assert_eq!(ctx.branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_capture_from_repo_finds_branch() {
        let temp_dir = create_test_repo();
        let ctx = InvocationContext::capture_from(temp_dir.path());
        assert_eq!(ctx.cwd, temp_dir.path());
        assert_eq!(ctx.branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_capture_outside_repo_has_no_branch() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = InvocationContext::capture_from(temp_dir.path());
        assert_eq!(ctx.branch, None);
    }

    #[test]
    fn test_placeholder_values_carry_clock_and_branch() {
        let now = chrono::NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let ctx = InvocationContext::new("/w", now, Some("dev".to_string()));
        let values = ctx.placeholder_values();
        assert_eq!(values.now, now);
        assert_eq!(values.branch.as_deref(), Some("dev"));
        assert_eq!(values.directive, None);
    }
}
