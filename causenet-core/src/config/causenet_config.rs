//! Top-level causenet configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, DatasetConfig, ExplorerConfig, GraphConfig};
use crate::errors::ConfigError;
use crate::models::{GraphMode, ImpactPolicy};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CAUSENET_*`)
/// 3. Project config (`causenet.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausenetConfig {
    pub dataset: DatasetConfig,
    pub graph: GraphConfig,
    pub explorer: ExplorerConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dataset_path: Option<PathBuf>,
    pub mode: Option<GraphMode>,
    pub impact_policy: Option<ImpactPolicy>,
    pub countries: Option<Vec<String>>,
    pub max_listed_causes: Option<usize>,
}

impl CausenetConfig {
    /// Load configuration with layered resolution. A missing project file is
    /// not an error; a malformed one is.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            tracing::debug!(path = %project_config_path.display(), "loading project config");
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load a specific TOML file, without env or CLI layers.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausenetConfig) -> Result<(), ConfigError> {
        let divisor = config.graph.weight_divisor;
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "graph.weight_divisor".to_string(),
                message: "must be a finite number greater than 0".to_string(),
            });
        }
        if !config.graph.default_impact.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "graph.default_impact".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if config.dataset.countries.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "dataset.countries".to_string(),
                message: "at least one country is required".to_string(),
            });
        }
        if config.dataset.countries.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "dataset.countries".to_string(),
                message: "country names must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut CausenetConfig) {
        if let Ok(val) = std::env::var("CAUSENET_DATASET_PATH") {
            if !val.trim().is_empty() {
                config.dataset.path = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var("CAUSENET_COUNTRIES") {
            let countries = split_countries(&val);
            if !countries.is_empty() {
                config.dataset.countries = countries;
            }
        }
        if let Ok(val) = std::env::var("CAUSENET_GRAPH_MODE") {
            if let Some(mode) = GraphMode::from_str_name(&val) {
                config.graph.mode = mode;
            }
        }
        if let Ok(val) = std::env::var("CAUSENET_IMPACT_POLICY") {
            if let Some(policy) = ImpactPolicy::from_str_name(&val) {
                config.graph.impact_policy = policy;
            }
        }
        if let Ok(val) = std::env::var("CAUSENET_DEFAULT_IMPACT") {
            if let Ok(v) = val.trim().parse::<f64>() {
                config.graph.default_impact = v;
            }
        }
        if let Ok(val) = std::env::var("CAUSENET_MAX_LISTED_CAUSES") {
            if let Ok(v) = val.trim().parse::<usize>() {
                config.explorer.max_listed_causes = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CausenetConfig, cli: &CliOverrides) {
        if let Some(ref path) = cli.dataset_path {
            config.dataset.path = Some(path.clone());
        }
        if let Some(ref countries) = cli.countries {
            config.dataset.countries = countries.clone();
        }
        if let Some(mode) = cli.mode {
            config.graph.mode = mode;
        }
        if let Some(policy) = cli.impact_policy {
            config.graph.impact_policy = policy;
        }
        if let Some(v) = cli.max_listed_causes {
            config.explorer.max_listed_causes = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Split a comma-separated country list, dropping blanks.
pub fn split_countries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
