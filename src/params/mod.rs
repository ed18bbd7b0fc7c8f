//! Two-token command validation.
//!
//! A command is a *directive* (the action, e.g. `to`) and a *layer* (the
//! target level, e.g. `project`). Both are validated against patterns from
//! the active profile, then the pair is checked against the profile's
//! combination table:
//!
//! ```text
//! breakdown to project      -> prompts/to/project/f_project.md
//! breakdown summary issue   -> prompts/summary/issue/f_issue.md
//! ```
//!
//! Patterns and tables are always passed in as [`ParamRules`]; nothing here
//! reads configuration on its own.

mod combination;
mod directive;
mod layer;
mod pattern;
mod rules;
mod two_params;

#[cfg(test)]
mod tests;

// Re-export public API
pub use combination::{ANY_LAYER, CombinationError, CombinationTable};
pub use directive::{DirectiveError, DirectiveType, MAX_DIRECTIVE_LEN};
pub use layer::{BASE_SCHEMA_FILENAME, LayerError, LayerType, MAX_LAYER_LEN};
pub use pattern::TypePattern;
pub use rules::ParamRules;
pub use two_params::{CommandInfo, TwoParams, TwoParamsError};
