//! Resolution inputs and the resolved bundle.

use crate::destination::DestinationPath;
use crate::params::{DirectiveType, LayerType, TwoParams};
use crate::profile::ConfigProfileName;
use crate::variables::VariableSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// `--from -` reads the input from stdin instead of a file.
pub const STDIN_MARKER: &str = "-";

/// The two positional tokens of a command, as tokenized by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTokens {
    pub directive: String,
    pub layer: String,
}

impl CommandTokens {
    pub fn new(directive: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            layer: layer.into(),
        }
    }
}

/// Options that shape a resolution beyond the two tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// `-c/--config`; `None` selects the default profile.
    pub profile: Option<String>,
    /// `-f/--from`; `-` means stdin.
    pub from_file: Option<String>,
    /// `-i/--input`
    pub from_layer: Option<String>,
    /// `-a/--adaptation`
    pub adaptation: Option<String>,
    /// `-o/--destination`
    pub destination: Option<String>,
    /// Raw custom variables, keys still prefixed.
    pub custom_variables: BTreeMap<String, String>,
    pub read_stdin: bool,
    /// Overrides `options.stdin.timeout_ms`.
    pub stdin_timeout: Option<Duration>,
}

impl ResolveOptions {
    /// The input file, unless it is the stdin marker.
    pub fn input_file(&self) -> Option<&str> {
        self.from_file
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty() && *f != STDIN_MARKER)
    }

    /// Whether `--from -` was given.
    pub fn from_stdin(&self) -> bool {
        self.from_file.as_deref().map(str::trim) == Some(STDIN_MARKER)
    }
}

/// Everything the rendering step needs, resolved from one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBundle {
    #[serde(flatten)]
    pub two_params: TwoParams,
    pub from_layer: String,
    pub adaptation: Option<String>,
    pub prompt_path: PathBuf,
    pub schema_path: PathBuf,
    pub output_directory: PathBuf,
    pub destination: DestinationPath,
    pub variables: VariableSet,
}

impl ResolvedBundle {
    pub fn directive(&self) -> &DirectiveType {
        self.two_params.directive()
    }

    pub fn layer(&self) -> &LayerType {
        self.two_params.layer()
    }

    pub fn profile(&self) -> &ConfigProfileName {
        self.two_params.profile()
    }

    /// The destination, or `None` when it resolved to `Absent`.
    pub fn destination_path(&self) -> Option<&Path> {
        self.destination.path()
    }
}
