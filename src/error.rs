//! Error types for the breakdown CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::resolve::ResolutionError;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for breakdown operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum BreakdownError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("failed to render prompt: {0}")]
    Template(#[from] TemplateError),

    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl BreakdownError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BreakdownError::UserError(_) => exit_codes::USER_ERROR,
            BreakdownError::Resolution(err) => match err {
                ResolutionError::Profile(_) | ResolutionError::Config(_) => exit_codes::USER_ERROR,
                ResolutionError::Stdin(_) => exit_codes::IO_FAILURE,
                _ => exit_codes::RESOLUTION_FAILURE,
            },
            BreakdownError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            BreakdownError::Io(_) => exit_codes::IO_FAILURE,
            BreakdownError::GitError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for breakdown operations.
pub type Result<T> = std::result::Result<T, BreakdownError>;
