//! CLI argument parsing for breakdown.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument structure; execution lives in the
//! `commands` module.

use crate::resolve::{CommandTokens, ResolveOptions};
use clap::{ArgAction, Parser};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Flag prefix for inline custom variables, e.g. `--uv-audience=ops`.
const CUSTOM_VARIABLE_FLAG: &str = "--uv-";

/// Breakdown: resolve a two-token command into a ready-to-use prompt.
///
/// `breakdown to project -f notes.md` looks up the `to/project` prompt,
/// fills in its variables, and prints it.
///
/// Custom variables are passed as `--uv-NAME=VALUE` and referenced in
/// prompts as `{{NAME}}`.
#[derive(Parser, Debug)]
#[command(name = "breakdown")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform (e.g., to, summary, defect).
    pub directive: String,

    /// Hierarchy level to act on (e.g., project, issue, task).
    pub layer: String,

    /// Configuration profile to use.
    #[arg(short = 'c', long = "config", value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Input file; `-` reads stdin.
    #[arg(short = 'f', long = "from", value_name = "FILE", allow_hyphen_values = true)]
    pub from: Option<String>,

    /// Layer the input comes from. Inferred from the input file name if omitted.
    #[arg(short = 'i', long = "input", value_name = "LAYER")]
    pub input: Option<String>,

    /// Prompt variant, selecting `f_{input}_{adaptation}.md`.
    #[arg(short = 'a', long)]
    pub adaptation: Option<String>,

    /// Output destination, relative to the working directory unless absolute.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub destination: Option<String>,

    /// Custom variable with its full key, e.g. `--var uv-audience=ops`.
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub vars: Vec<(String, String)>,

    /// Directory holding `{profile}-app.yml` and `{profile}-user.yml`.
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Read input text from stdin even when it is a terminal.
    #[arg(long)]
    pub stdin: bool,

    /// How long to wait for stdin before giving up.
    #[arg(long, value_name = "MS")]
    pub stdin_timeout_ms: Option<u64>,

    /// Print the resolved bundle as JSON instead of the rendered prompt.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// `--uv-NAME=VALUE` variables in command-line order, lifted out before
    /// clap parsing.
    #[arg(skip)]
    pub inline_vars: Vec<(String, String)>,
}

impl Cli {
    /// Parse command-line arguments, exiting with usage on error.
    pub fn parse_args() -> Self {
        match Self::try_parse_with_vars(std::env::args_os()) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    /// Parse `args`, lifting `--uv-NAME=VALUE` tokens out first.
    pub fn try_parse_with_vars<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (rest, inline_vars) = split_custom_variables(args);
        let mut cli = Cli::try_parse_from(rest)?;
        cli.inline_vars = inline_vars;
        Ok(cli)
    }

    pub fn tokens(&self) -> CommandTokens {
        CommandTokens::new(&self.directive, &self.layer)
    }

    /// All custom variables.
    ///
    /// Later values win, and `--var` wins over an inline flag with the same
    /// key. Every overwritten value is logged with `warn!`.
    pub fn custom_variables(&self) -> BTreeMap<String, String> {
        let (vars, overwritten) = merge_variables(self.inline_vars.iter().chain(&self.vars));
        for (key, dropped) in &overwritten {
            warn!(
                key = key.as_str(),
                dropped = dropped.as_str(),
                "custom variable given more than once; keeping the last value"
            );
        }
        vars
    }

    /// Options for resolution.
    ///
    /// Stdin is read when `--stdin` is given, or when nothing names an input
    /// file and stdin is not a terminal. `--from -` is handled by the resolver.
    pub fn resolve_options(&self, stdin_is_terminal: bool) -> ResolveOptions {
        ResolveOptions {
            profile: self.profile.clone(),
            from_file: self.from.clone(),
            from_layer: self.input.clone(),
            adaptation: self.adaptation.clone(),
            destination: self.destination.clone(),
            custom_variables: self.custom_variables(),
            read_stdin: self.stdin || (self.from.is_none() && !stdin_is_terminal),
            stdin_timeout: self.stdin_timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Separate `--uv-NAME=VALUE` tokens from the rest of the arguments.
///
/// The key keeps its prefix (`uv-NAME`) so prefix validation still applies.
/// A flag without `=` yields an empty value, which assembly then rejects.
/// Tokens after `--` are left alone.
pub fn split_custom_variables<I, T>(args: I) -> (Vec<OsString>, Vec<(String, String)>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rest = Vec::new();
    let mut vars = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();

        if passthrough {
            rest.push(arg);
            continue;
        }

        match arg.to_str() {
            Some("--") => {
                passthrough = true;
                rest.push(arg);
            }
            Some(s) if s.starts_with(CUSTOM_VARIABLE_FLAG) => {
                let flag = &s[2..];
                let (key, value) = flag.split_once('=').unwrap_or((flag, ""));
                vars.push((key.to_string(), value.to_string()));
            }
            _ => rest.push(arg),
        }
    }

    (rest, vars)
}

/// Collect `pairs` into a map, returning each overwritten `(key, value)`.
fn merge_variables<'a>(
    pairs: impl IntoIterator<Item = &'a (String, String)>,
) -> (BTreeMap<String, String>, Vec<(String, String)>) {
    let mut vars = BTreeMap::new();
    let mut overwritten = Vec::new();

    for (key, value) in pairs {
        if let Some(previous) = vars.insert(key.clone(), value.clone()) {
            overwritten.push((key.clone(), previous));
        }
    }

    (vars, overwritten)
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
