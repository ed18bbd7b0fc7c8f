//! Template variables.
//!
//! Two kinds of variables reach a prompt template:
//!
//! - **Standard** variables derived from the resolution itself
//!   (`input_text`, `input_text_file`, `destination_path`, `schema_file`)
//! - **Custom** variables supplied by the user with a required prefix
//!   (default `uv-`), e.g. `--uv-audience=ops` becomes `{{audience}}`
//!
//! Custom names may never shadow a standard name.

mod assembler;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use assembler::VariableAssembler;
pub use types::{
    DESTINATION_PATH, INPUT_TEXT, INPUT_TEXT_FILE, SCHEMA_FILE, STANDARD_VARIABLE_NAMES,
    StandardVariables, VariableError, VariableSet,
};
