use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.get_log_filter(), DEFAULT_LOG_FILTER);
    assert_eq!(config.get_binding_defaults(), BindingDefaults::default());
    assert!(config.namespaces.is_empty());
}

#[test]
fn test_binding_defaults_match_constants() {
    let defaults = BindingDefaults::default();
    assert_eq!(defaults.prevent_default, DEFAULT_PREVENT_DEFAULT);
    assert_eq!(defaults.stop_propagation, DEFAULT_STOP_PROPAGATION);
}

#[test]
fn test_partial_binding_defaults_fill_missing_fields() {
    let defaults: BindingDefaults = serde_json::from_str(r#"{"stopPropagation": true}"#).unwrap();
    assert!(defaults.prevent_default);
    assert!(defaults.stop_propagation);
}

#[test]
fn test_config_camel_case_fields() {
    let json = r#"{
        "logFilter": "debug",
        "bindings": { "preventDefault": false },
        "namespaces": { "editor": { "stopPropagation": true } }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.get_log_filter(), "debug");
    assert!(!config.get_binding_defaults().prevent_default);

    let editor = config.get_namespace_defaults("editor");
    assert!(editor.prevent_default);
    assert!(editor.stop_propagation);

    // Unknown namespaces fall back to the global bindings section
    let other = config.get_namespace_defaults("grid");
    assert!(!other.prevent_default);
    assert!(!other.stop_propagation);
}

#[test]
fn test_config_serialization_skips_empty_fields() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_options_for_namespace() {
    let mut config = Config::default();
    config.namespaces.insert(
        "editor".to_string(),
        BindingDefaults {
            prevent_default: false,
            stop_propagation: true,
        },
    );

    let options = config.options_for(Some("editor"));
    assert_eq!(options.namespace.as_deref(), Some("editor"));
    assert!(!options.prevent_default);
    assert!(options.stop_propagation);
    assert!(options.should_run());

    let options = config.options_for(None);
    assert_eq!(options.namespace, None);
    assert!(options.prevent_default);
    assert!(!options.stop_propagation);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config(&dir.path().join("missing.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_json_returns_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_config(&path), Config::default());
}

#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "namespaces": { "grid": { "preventDefault": false } } }"#,
    )
    .unwrap();

    let config = load_config(&path);
    assert!(!config.get_namespace_defaults("grid").prevent_default);
}

#[test]
fn test_default_config_path_ends_with_file_name() {
    let path = default_config_path();
    assert!(path.ends_with("shortcut-context/config.json"));
}
