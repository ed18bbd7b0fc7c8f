//! Command resolution.
//!
//! Turns two raw tokens plus options into a [`ResolvedBundle`]: the
//! validated command identity, its prompt and schema paths, the output
//! destination, and the variables handed to template rendering.

mod bundle;
mod error;
mod orchestrator;


// Re-export public API
pub use bundle::{CommandTokens, ResolveOptions, ResolvedBundle, STDIN_MARKER};
pub use error::ResolutionError;
pub use orchestrator::{MAX_ADAPTATION_LEN, Resolver, resolve};
