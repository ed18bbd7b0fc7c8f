//! Output destination resolution.
//!
//! Derives where rendered output belongs from the `-o/--destination` option,
//! the invocation directory, and an optional configured prefix template such
//! as `dest/{yyyy}/{mm}/{branch}.md`. The resolver is a pure function; creating
//! or checking directories is left to the caller.

mod placeholder;
mod resolver;


// Re-export public API
pub use placeholder::{PlaceholderValues, expand_placeholders};
pub use resolver::{DestinationPath, DestinationResolutionError, DestinationSpec, resolve_destination};
