//! Command execution for breakdown.
//!
//! Wires the CLI to resolution: capture the invocation context, load the
//! profile config, resolve the command, then print either the rendered
//! prompt or the resolved bundle as JSON.

use crate::cli::Cli;
use crate::config::ConfigLoader;
use crate::context::InvocationContext;
use crate::error::{BreakdownError, Result};
use crate::logging;
use crate::resolve::{ResolvedBundle, Resolver};
use crate::stdin::{ProcessStdin, StdinSource};
use crate::template;
use tracing::debug;

/// Run the command described by `cli` and print its output to stdout.
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let context = InvocationContext::capture()?;
    let output = execute(&cli, &context, &ProcessStdin, ProcessStdin::is_terminal())?;

    print!("{}", output);
    Ok(())
}

/// Resolve and render without touching stdout.
///
/// # Returns
///
/// * `Ok(String)` - The rendered prompt, or the bundle JSON with `--json`
/// * `Err(BreakdownError)` - Resolution, template, or I/O failure
pub fn execute(
    cli: &Cli,
    context: &InvocationContext,
    stdin: &dyn StdinSource,
    stdin_is_terminal: bool,
) -> Result<String> {
    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::new(context.cwd.join(dir)),
        None => ConfigLoader::for_cwd(&context.cwd),
    };
    debug!(config_dir = %loader.config_dir().display(), "using config directory");

    let options = cli.resolve_options(stdin_is_terminal);
    let bundle = Resolver::new(&loader, stdin, context).resolve(&cli.tokens(), &options)?;

    if cli.json {
        let mut json = serde_json::to_string_pretty(&bundle)
            .map_err(|e| BreakdownError::Io(format!("failed to serialize bundle: {}", e)))?;
        json.push('\n');
        Ok(json)
    } else {
        render_prompt(&bundle)
    }
}

/// Read the bundle's prompt template and substitute its variables.
pub fn render_prompt(bundle: &ResolvedBundle) -> Result<String> {
    let prompt = std::fs::read_to_string(&bundle.prompt_path).map_err(|e| {
        BreakdownError::Io(format!(
            "failed to read prompt template '{}': {}\n\
             Fix: create the template or check app_prompt.base_dir in the profile config.",
            bundle.prompt_path.display(),
            e
        ))
    })?;

    Ok(template::render(
        &prompt,
        &bundle.variables.to_template_vars(),
    )?)
}
