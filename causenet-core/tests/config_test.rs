//! Tests for the causenet configuration system.

use std::sync::Mutex;

use causenet_core::config::{CausenetConfig, CliOverrides};
use causenet_core::errors::ConfigError;
use causenet_core::{GraphMode, ImpactPolicy};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CAUSENET_ env vars to prevent cross-test contamination.
fn clear_causenet_env_vars() {
    for key in [
        "CAUSENET_DATASET_PATH",
        "CAUSENET_COUNTRIES",
        "CAUSENET_GRAPH_MODE",
        "CAUSENET_IMPACT_POLICY",
        "CAUSENET_DEFAULT_IMPACT",
        "CAUSENET_MAX_LISTED_CAUSES",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_causenet_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("causenet.toml"),
        r#"
[dataset]
path = "deaths.json"
countries = ["FRANCE", "SPAIN"]

[graph]
mode = "flat"
default_impact = 0.25

[explorer]
max_listed_causes = 50
"#,
    )
    .unwrap();

    // Env overrides the project file.
    std::env::set_var("CAUSENET_GRAPH_MODE", "hierarchical");
    std::env::set_var("CAUSENET_MAX_LISTED_CAUSES", "10");

    // CLI overrides env.
    let cli = CliOverrides {
        max_listed_causes: Some(5),
        impact_policy: Some(ImpactPolicy::Strict),
        ..Default::default()
    };

    let config = CausenetConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.graph.mode, GraphMode::Hierarchical);
    assert_eq!(config.explorer.max_listed_causes, Some(5));
    assert_eq!(config.graph.impact_policy, ImpactPolicy::Strict);
    assert_eq!(config.graph.default_impact, 0.25);
    assert_eq!(config.dataset.countries, vec!["FRANCE", "SPAIN"]);
    assert_eq!(
        config.dataset.path.as_deref(),
        Some(std::path::Path::new("deaths.json"))
    );

    clear_causenet_env_vars();
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_causenet_env_vars();

    let dir = tempdir();
    let config = CausenetConfig::load(dir.path(), None).unwrap();

    assert_eq!(config, CausenetConfig::default());
    assert_eq!(config.graph.mode, GraphMode::Stratified);
    assert_eq!(config.graph.default_impact, 0.1);
    assert_eq!(config.graph.weight_divisor, 1200.0);
    assert_eq!(config.dataset.countries, vec!["FRANCE"]);
    assert_eq!(config.dataset.primary_country(), "FRANCE");
    assert_eq!(config.explorer.max_listed_causes, Some(50));
}

#[test]
fn test_invalid_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_causenet_env_vars();

    std::env::set_var("CAUSENET_GRAPH_MODE", "sideways");
    std::env::set_var("CAUSENET_DEFAULT_IMPACT", "lots");
    std::env::set_var("CAUSENET_COUNTRIES", " SPAIN , ,ITALY ");

    let dir = tempdir();
    let config = CausenetConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.graph.mode, GraphMode::Stratified);
    assert_eq!(config.graph.default_impact, 0.1);
    assert_eq!(config.dataset.countries, vec!["SPAIN", "ITALY"]);

    clear_causenet_env_vars();
}

#[test]
fn test_malformed_project_file_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_causenet_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("causenet.toml"), "[graph\nmode = ").unwrap();
    let err = CausenetConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = CausenetConfig::default();
    config.graph.weight_divisor = 0.0;
    assert!(matches!(
        CausenetConfig::validate(&config),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "graph.weight_divisor"
    ));

    let mut config = CausenetConfig::default();
    config.dataset.countries.clear();
    assert!(CausenetConfig::validate(&config).is_err());

    let mut config = CausenetConfig::default();
    config.graph.default_impact = f64::NAN;
    assert!(CausenetConfig::validate(&config).is_err());
}

#[test]
fn test_toml_round_trip() {
    let toml_str = r#"
[graph]
mode = "hierarchical"
impact_policy = "strict"
weight_divisor = 600.0
"#;
    let config = CausenetConfig::from_toml(toml_str).unwrap();
    assert_eq!(config.graph.mode, GraphMode::Hierarchical);
    assert_eq!(config.graph.weight_divisor, 600.0);

    let back = CausenetConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(back, config);
}
