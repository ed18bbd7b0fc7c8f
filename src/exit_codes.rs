//! Exit code constants for the breakdown CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad or missing config)
//! - 2: Resolution failure (directive, layer, options, variables)
//! - 3: Template rendering failure
//! - 4: I/O failure (prompt file, stdin, git)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable profile config.
pub const USER_ERROR: i32 = 1;

/// The command could not be resolved: invalid tokens, options, or variables.
pub const RESOLUTION_FAILURE: i32 = 2;

/// The prompt template could not be rendered.
pub const TEMPLATE_FAILURE: i32 = 3;

/// Reading the prompt file or stdin failed, or git could not be run.
pub const IO_FAILURE: i32 = 4;
