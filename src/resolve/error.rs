//! The outer resolution error.

use crate::config::ConfigError;
use crate::destination::DestinationResolutionError;
use crate::params::TwoParamsError;
use crate::profile::ProfileError;
use crate::stdin::StdinError;
use crate::variables::VariableError;
use thiserror::Error;

/// Every way a resolution can fail, one variant per stage.
///
/// Stages stop at their first failure, except variable assembly which
/// reports every rejected variable at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Params(#[from] TwoParamsError),

    #[error("invalid value '{value}' for {option}: {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Destination(#[from] DestinationResolutionError),

    #[error(transparent)]
    Stdin(#[from] StdinError),

    #[error("{}", format_variable_errors(.0))]
    Variables(Vec<VariableError>),
}

fn format_variable_errors(errors: &[VariableError]) -> String {
    let mut message = format!("{} custom variable(s) rejected:", errors.len());
    for error in errors {
        message.push_str("\n  - ");
        message.push_str(&error.to_string());
    }
    message
}

impl From<Vec<VariableError>> for ResolutionError {
    fn from(errors: Vec<VariableError>) -> Self {
        ResolutionError::Variables(errors)
    }
}
