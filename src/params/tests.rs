//! Tests for the TwoParams aggregate.

use super::*;
use crate::config::TwoParamsConfig;
use crate::profile::ConfigProfileName;
use proptest::prelude::*;
use std::path::Path;

// =========================================================================
// Helper functions
// =========================================================================

fn default_rules() -> ParamRules {
    ParamRules::from_config(&TwoParamsConfig::default()).unwrap()
}

fn restricted_rules() -> ParamRules {
    ParamRules::new(
        TypePattern::new("to|summary|defect").unwrap(),
        TypePattern::new("project|issue|task").unwrap(),
        CombinationTable::from_entries([
            ("to", vec!["project", "issue", "task"]),
            ("summary", vec!["project"]),
        ]),
    )
}

fn default_profile() -> ConfigProfileName {
    ConfigProfileName::default_profile()
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_to_project_resolves_prompt_path() {
    let params = TwoParams::create("to", "project", &default_profile(), &default_rules()).unwrap();

    assert_eq!(params.directive().value(), "to");
    assert_eq!(params.layer().value(), "project");
    assert_eq!(params.profile(), &default_profile());
    assert_eq!(
        params.resolve_prompt_path(Path::new("prompts"), None, None),
        Path::new("prompts/to/project/f_project.md")
    );
}

#[test]
fn test_bogus_directive_is_invalid_directive() {
    let err = TwoParams::create("bogus", "project", &default_profile(), &default_rules())
        .unwrap_err();

    match err {
        TwoParamsError::InvalidDirective {
            value,
            profile,
            source,
        } => {
            assert_eq!(value, "bogus");
            assert_eq!(profile, default_profile());
            assert!(matches!(source, DirectiveError::PatternMismatch { .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_invalid_layer() {
    let err = TwoParams::create("to", "epic", &default_profile(), &default_rules()).unwrap_err();
    assert!(matches!(
        err,
        TwoParamsError::InvalidLayer { ref value, source: LayerError::PatternMismatch { .. }, .. }
            if value == "epic"
    ));
}

#[test]
fn test_directive_error_takes_precedence_over_layer_error() {
    let err = TwoParams::create("bogus", "epic", &default_profile(), &default_rules())
        .unwrap_err();
    assert!(matches!(err, TwoParamsError::InvalidDirective { .. }));
}

#[test]
fn test_empty_inputs_report_empty_input() {
    let err = TwoParams::create("", "project", &default_profile(), &default_rules()).unwrap_err();
    assert!(matches!(
        err,
        TwoParamsError::InvalidDirective { source: DirectiveError::EmptyInput, .. }
    ));

    let err = TwoParams::create("to", "  ", &default_profile(), &default_rules()).unwrap_err();
    assert!(matches!(
        err,
        TwoParamsError::InvalidLayer { source: LayerError::EmptyInput, .. }
    ));
}

#[test]
fn test_unsupported_combination() {
    let err = TwoParams::create("summary", "task", &default_profile(), &restricted_rules())
        .unwrap_err();

    match err {
        TwoParamsError::UnsupportedCombination {
            directive,
            layer,
            source,
            ..
        } => {
            assert_eq!(directive, "summary");
            assert_eq!(layer, "task");
            assert_eq!(source.allowed, vec!["project"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unlisted_directive_fails_combination_even_if_pattern_matches() {
    let err = TwoParams::create("defect", "task", &default_profile(), &restricted_rules())
        .unwrap_err();
    assert!(matches!(err, TwoParamsError::UnsupportedCombination { .. }));
}

#[test]
fn test_error_messages() {
    let err = TwoParams::create("bogus", "project", &default_profile(), &default_rules())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid directive: directive 'bogus' does not match pattern 'to|summary|defect' for profile 'default'"
    );
}

// =========================================================================
// Path operations
// =========================================================================

#[test]
fn test_resolve_prompt_path_with_from_layer_and_adaptation() {
    let params = TwoParams::create("summary", "issue", &default_profile(), &default_rules())
        .unwrap();
    assert_eq!(
        params.resolve_prompt_path(Path::new("/p"), Some("task"), Some("strict")),
        Path::new("/p/summary/issue/f_task_strict.md")
    );
}

#[test]
fn test_resolve_schema_path() {
    let params = TwoParams::create("defect", "task", &default_profile(), &default_rules()).unwrap();
    assert_eq!(
        params.resolve_schema_path(Path::new("schema")),
        Path::new("schema/defect/task/base.schema.json")
    );
}

#[test]
fn test_resolve_output_directory() {
    let params = TwoParams::create("to", "issue", &default_profile(), &default_rules()).unwrap();
    assert_eq!(
        params.resolve_output_directory(Path::new("out")),
        Path::new("out/to/issue")
    );
}

#[test]
fn test_command_info_snapshot() {
    let profile = ConfigProfileName::create(Some("team")).unwrap();
    let params = TwoParams::create("to", "task", &profile, &default_rules()).unwrap();

    let before = chrono::Utc::now();
    let info = params.to_command_info();
    let after = chrono::Utc::now();

    assert_eq!(info.directive, "to");
    assert_eq!(info.layer, "task");
    assert_eq!(info.profile, "team");
    assert!(info.timestamp >= before && info.timestamp <= after);
}

#[test]
fn test_structural_equality() {
    let a = TwoParams::create("to", "project", &default_profile(), &default_rules()).unwrap();
    let b = TwoParams::create(" to ", "project", &default_profile(), &default_rules()).unwrap();
    let c = TwoParams::create("to", "issue", &default_profile(), &default_rules()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_serializes_to_strings() {
    let params = TwoParams::create("to", "project", &default_profile(), &default_rules()).unwrap();
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"directive": "to", "layer": "project", "profile": "default"})
    );
}

// =========================================================================
// Properties
// =========================================================================

fn default_pair() -> impl Strategy<Value = (&'static str, &'static str)> {
    (
        prop::sample::select(vec!["to", "summary", "defect"]),
        prop::sample::select(vec!["project", "issue", "task"]),
    )
}

proptest! {
    #[test]
    fn prop_listed_pairs_always_validate((directive, layer) in default_pair()) {
        let params = TwoParams::create(directive, layer, &default_profile(), &default_rules());
        prop_assert!(params.is_ok());
    }

    #[test]
    fn prop_path_resolution_is_deterministic(
        (directive, layer) in default_pair(),
        base in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        adaptation in proptest::option::of("[a-z]{1,6}"),
    ) {
        let params = TwoParams::create(directive, layer, &default_profile(), &default_rules()).unwrap();
        let base = Path::new(&base);

        let first = params.resolve_prompt_path(base, None, adaptation.as_deref());
        let second = params.resolve_prompt_path(base, None, adaptation.as_deref());
        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with(base.join(directive).join(layer)));
        prop_assert_eq!(params.resolve_schema_path(base), params.resolve_schema_path(base));
    }

    #[test]
    fn prop_unlisted_directive_is_pattern_mismatch(
        directive in "[a-z]{1,20}".prop_filter("not a default directive", |d| {
            !["to", "summary", "defect"].contains(&d.as_str())
        }),
    ) {
        let err = TwoParams::create(&directive, "project", &default_profile(), &default_rules())
            .unwrap_err();
        let is_mismatch = matches!(
            err,
            TwoParamsError::InvalidDirective { source: DirectiveError::PatternMismatch { .. }, .. }
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn prop_overlong_layer_is_too_long(layer in "[a-z]{31,40}") {
        let err = TwoParams::create("to", &layer, &default_profile(), &default_rules())
            .unwrap_err();
        let is_too_long = matches!(
            err,
            TwoParamsError::InvalidLayer { source: LayerError::TooLong { .. }, .. }
        );
        prop_assert!(is_too_long);
    }
}
