//! Sequencing the resolution stages.

use super::bundle::{CommandTokens, ResolveOptions, ResolvedBundle};
use super::error::ResolutionError;
use crate::config::{ProfileConfig, ProfileConfigSource};
use crate::context::InvocationContext;
use crate::destination::{DestinationPath, resolve_destination};
use crate::params::{LayerType, ParamRules, TwoParams};
use crate::profile::ConfigProfileName;
use crate::stdin::{ProcessStdin, StdinSource};
use crate::variables::{StandardVariables, VariableAssembler};
use std::path::Path;
use tracing::{debug, info};

/// Maximum length of an adaptation suffix.
pub const MAX_ADAPTATION_LEN: usize = 50;

/// Separators used to split an input file stem when inferring its layer.
const LAYER_HINT_SEPARATORS: [char; 3] = ['_', '-', '.'];

/// Resolves commands against a config source, a stdin source, and an
/// invocation context.
pub struct Resolver<'a> {
    configs: &'a dyn ProfileConfigSource,
    stdin: &'a dyn StdinSource,
    context: &'a InvocationContext,
}

impl<'a> Resolver<'a> {
    pub fn new(
        configs: &'a dyn ProfileConfigSource,
        stdin: &'a dyn StdinSource,
        context: &'a InvocationContext,
    ) -> Self {
        Self {
            configs,
            stdin,
            context,
        }
    }

    /// Run every stage for one command.
    ///
    /// Stages run in order and stop at the first failure:
    ///
    /// 1. profile name
    /// 2. profile config and its compiled rules
    /// 3. directive, layer, and combination
    /// 4. input layer and adaptation options
    /// 5. destination, prompt, and schema paths
    /// 6. stdin (only when requested)
    /// 7. variables, which report every rejection at once
    pub fn resolve(
        &self,
        tokens: &CommandTokens,
        options: &ResolveOptions,
    ) -> Result<ResolvedBundle, ResolutionError> {
        let profile = ConfigProfileName::create(options.profile.as_deref())?;

        let config = self.configs.profile_config(&profile)?;
        config.validate()?;
        let rules = ParamRules::from_config(&config.params.two)?;

        let two_params = TwoParams::create(&tokens.directive, &tokens.layer, &profile, &rules)?;

        let from_layer = resolve_from_layer(&two_params, options, &rules)?;
        let adaptation = validate_adaptation(options.adaptation.as_deref())?;

        let cwd = self.context.cwd.as_path();
        let destination = self.destination_for(&two_params, options, &config);
        let prompt_path = two_params.resolve_prompt_path(
            &config.prompt_base_dir_in(cwd),
            Some(&from_layer),
            adaptation.as_deref(),
        );
        let schema_path = two_params.resolve_schema_path(&config.schema_base_dir_in(cwd));
        let output_directory = two_params.resolve_output_directory(&config.working_dir_in(cwd));

        let input_text = if options.read_stdin || options.from_stdin() {
            let timeout = options.stdin_timeout.unwrap_or_else(|| config.stdin_timeout());
            let text = self.stdin.read(timeout)?;
            debug!(bytes = text.len(), "read stdin");
            Some(text).filter(|t| !t.trim().is_empty())
        } else {
            None
        };

        let standard = StandardVariables {
            input_text,
            input_text_file: options
                .input_file()
                .map(|file| cwd.join(file).display().to_string()),
            destination_path: destination.path().map(|p| p.display().to_string()),
            schema_file: Some(schema_path.display().to_string()),
        };

        let variables = VariableAssembler::new(config.custom_variable_prefix())
            .assemble(standard.into_map(), &options.custom_variables)?;

        info!(
            directive = two_params.directive().value(),
            layer = two_params.layer().value(),
            profile = %profile,
            prompt = %prompt_path.display(),
            "resolved command"
        );

        Ok(ResolvedBundle {
            two_params,
            from_layer,
            adaptation,
            prompt_path,
            schema_path,
            output_directory,
            destination,
            variables,
        })
    }

    fn destination_for(
        &self,
        two_params: &TwoParams,
        options: &ResolveOptions,
        config: &ProfileConfig,
    ) -> DestinationPath {
        let values = self.context.placeholder_values().with_command(
            two_params.directive().value(),
            two_params.layer().value(),
            two_params.profile().as_str(),
        );

        resolve_destination(
            options.destination.as_deref(),
            Path::new(&config.working_dir),
            &self.context.cwd,
            config.destination_prefix(),
            &values,
        )
    }
}

/// Resolve `tokens` against a single profile config, reading the process's
/// stdin if the options ask for it.
///
/// The config is used whatever profile the options name.
pub fn resolve(
    tokens: &CommandTokens,
    options: &ResolveOptions,
    profile_config: &ProfileConfig,
    context: &InvocationContext,
) -> Result<ResolvedBundle, ResolutionError> {
    Resolver::new(profile_config, &ProcessStdin, context).resolve(tokens, options)
}

/// The layer the input comes from.
///
/// An explicit `-i/--input` must itself be a valid layer. Without one, the
/// first token of the input file stem that matches the layer pattern is
/// used, e.g. `issue_login.md` -> `issue`. Otherwise it is the command's
/// own layer.
fn resolve_from_layer(
    two_params: &TwoParams,
    options: &ResolveOptions,
    rules: &ParamRules,
) -> Result<String, ResolutionError> {
    if let Some(raw) = options.from_layer.as_deref() {
        let layer = LayerType::create(raw, two_params.profile(), &rules.layer_pattern).map_err(
            |e| ResolutionError::InvalidOption {
                option: "from_layer",
                value: raw.to_string(),
                reason: e.to_string(),
            },
        )?;
        return Ok(layer.value().to_string());
    }

    let inferred = options
        .input_file()
        .and_then(|file| Path::new(file).file_stem())
        .and_then(|stem| stem.to_str())
        .and_then(|stem| {
            stem.split(LAYER_HINT_SEPARATORS).find_map(|token| {
                LayerType::create(token, two_params.profile(), &rules.layer_pattern).ok()
            })
        });

    match inferred {
        Some(layer) => {
            debug!(layer = layer.value(), "inferred input layer from file name");
            Ok(layer.value().to_string())
        }
        None => Ok(two_params.layer().value().to_string()),
    }
}

fn validate_adaptation(raw: Option<&str>) -> Result<Option<String>, ResolutionError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let len = raw.chars().count();
    let valid = (1..=MAX_ADAPTATION_LEN).contains(&len)
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(Some(raw.to_string()))
    } else {
        Err(ResolutionError::InvalidOption {
            option: "adaptation",
            value: raw.to_string(),
            reason: format!(
                "expected 1-{} characters of [a-zA-Z0-9_-]",
                MAX_ADAPTATION_LEN
            ),
        })
    }
}
