//! Tests for variable assembly.

use super::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_missing_prefix_is_invalid_prefix() {
    let errors = VariableAssembler::default()
        .assemble(BTreeMap::new(), &map(&[("custom-x", "1")]))
        .unwrap_err();
    assert_eq!(
        errors,
        vec![VariableError::InvalidPrefix {
            key: "custom-x".to_string(),
            prefix: "uv-".to_string(),
        }]
    );
}

#[test]
fn test_reserved_name_even_when_not_produced() {
    let errors = VariableAssembler::default()
        .assemble(BTreeMap::new(), &map(&[("uv-input_text", "v")]))
        .unwrap_err();
    assert_eq!(
        errors,
        vec![VariableError::ReservedName {
            key: "uv-input_text".to_string(),
            name: "input_text".to_string(),
        }]
    );
}

#[test]
fn test_collision_with_supplied_standard_key() {
    let standard = map(&[("extra_standard", "s")]);
    let errors = VariableAssembler::default()
        .assemble(standard, &map(&[("uv-extra_standard", "v")]))
        .unwrap_err();
    assert!(matches!(errors[0], VariableError::ReservedName { .. }));
}

#[test]
fn test_empty_value() {
    let errors = VariableAssembler::default()
        .assemble(BTreeMap::new(), &map(&[("uv-name", "  ")]))
        .unwrap_err();
    assert_eq!(
        errors,
        vec![VariableError::EmptyValue {
            key: "uv-name".to_string()
        }]
    );
}

#[test]
fn test_empty_name_after_prefix() {
    let errors = VariableAssembler::default()
        .assemble(BTreeMap::new(), &map(&[("uv-", "value")]))
        .unwrap_err();
    assert!(matches!(errors.as_slice(), [VariableError::EmptyName { .. }]));
}

#[test]
fn test_one_key_can_have_several_errors() {
    let errors = VariableAssembler::default()
        .assemble(BTreeMap::new(), &map(&[("uv-schema_file", "")]))
        .unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], VariableError::EmptyValue { .. }));
    assert!(matches!(errors[1], VariableError::ReservedName { .. }));
}

#[test]
fn test_all_errors_collected_in_key_order() {
    let custom = map(&[
        ("bad", "1"),
        ("uv-ok", "fine"),
        ("uv-destination_path", "x"),
        ("uv-empty", ""),
    ]);
    let errors = VariableAssembler::default()
        .assemble(BTreeMap::new(), &custom)
        .unwrap_err();

    let keys: Vec<&str> = errors.iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["bad", "uv-destination_path", "uv-empty"]);
}

#[test]
fn test_successful_merge_strips_prefix() {
    let standard = map(&[(SCHEMA_FILE, "/s/base.schema.json")]);
    let set = VariableAssembler::default()
        .assemble(standard, &map(&[("uv-audience", "ops"), ("uv-tone", "terse")]))
        .unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(set.get("audience"), Some("ops"));
    assert_eq!(set.get("tone"), Some("terse"));
    assert_eq!(set.get(SCHEMA_FILE), Some("/s/base.schema.json"));
    assert_eq!(set.get("uv-audience"), None);
    assert_eq!(set.custom().len(), 2);
    assert_eq!(set.standard().len(), 1);
}

#[test]
fn test_custom_value_is_kept_verbatim() {
    let set = VariableAssembler::default()
        .assemble(BTreeMap::new(), &map(&[("uv-x", "  spaced  ")]))
        .unwrap();
    assert_eq!(set.get("x"), Some("  spaced  "));
}

#[test]
fn test_configured_prefix() {
    let assembler = VariableAssembler::new("var-");
    assert_eq!(assembler.prefix(), "var-");
    let set = assembler
        .assemble(BTreeMap::new(), &map(&[("var-name", "v")]))
        .unwrap();
    assert_eq!(set.get("name"), Some("v"));

    let errors = assembler
        .assemble(BTreeMap::new(), &map(&[("uv-name", "v")]))
        .unwrap_err();
    assert!(matches!(errors[0], VariableError::InvalidPrefix { ref prefix, .. } if prefix == "var-"));
}

#[test]
fn test_empty_input_is_empty_set() {
    let set = VariableAssembler::default()
        .assemble(BTreeMap::new(), &BTreeMap::new())
        .unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_standard_variables_into_map_skips_absent() {
    let standard = StandardVariables {
        input_text: Some("hello".to_string()),
        schema_file: Some("/s".to_string()),
        ..Default::default()
    };
    let map = standard.into_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(INPUT_TEXT).map(String::as_str), Some("hello"));
    assert!(!map.contains_key(DESTINATION_PATH));
}

#[test]
fn test_to_template_vars_contains_both_kinds() {
    let set = VariableAssembler::default()
        .assemble(map(&[(INPUT_TEXT, "in")]), &map(&[("uv-a", "1")]))
        .unwrap();
    let vars = set.to_template_vars();
    assert_eq!(vars.get(INPUT_TEXT).map(String::as_str), Some("in"));
    assert_eq!(vars.get("a").map(String::as_str), Some("1"));
}

#[test]
fn test_error_messages() {
    let err = VariableError::InvalidPrefix {
        key: "x".to_string(),
        prefix: "uv-".to_string(),
    };
    assert_eq!(err.to_string(), "custom variable 'x' must start with 'uv-'");

    let err = VariableError::ReservedName {
        key: "uv-input_text".to_string(),
        name: "input_text".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "custom variable 'uv-input_text' uses reserved name 'input_text'"
    );
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn prop_every_rejected_key_is_reported(
        custom in proptest::collection::btree_map("(uv-)?[a-z_]{0,12}", "[a-z ]{0,4}", 0..8),
    ) {
        let assembler = VariableAssembler::default();
        match assembler.assemble(BTreeMap::new(), &custom) {
            Ok(set) => {
                prop_assert_eq!(set.custom().len(), custom.len());
            }
            Err(errors) => {
                for (key, value) in &custom {
                    let name = key.strip_prefix("uv-");
                    let should_reject = match name {
                        None => true,
                        Some(name) => {
                            name.is_empty()
                                || value.trim().is_empty()
                                || STANDARD_VARIABLE_NAMES.contains(&name)
                        }
                    };
                    let reported = errors.iter().any(|e| e.key() == key);
                    prop_assert_eq!(should_reject, reported, "key {:?}", key);
                }
            }
        }
    }
}
