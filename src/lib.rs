//! Breakdown: resolve two-token prompt commands.
//!
//! A command such as `breakdown to project` names a *directive* and a
//! *layer*. Resolution validates both against the active profile, derives
//! the prompt, schema, and destination paths, and assembles the variables a
//! prompt template is rendered with.
//!
//! The entry point is [`resolve::Resolver`]; the binary adds config loading
//! from disk, stdin, and template rendering around it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod destination;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod params;
pub mod profile;
pub mod resolve;
pub mod stdin;
pub mod template;
pub mod variables;

#[cfg(test)]
pub(crate) mod test_support;
