//! Configuration system for causenet.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod causenet_config;
pub mod dataset_config;
pub mod defaults;
pub mod explorer_config;
pub mod graph_config;

pub use causenet_config::{CausenetConfig, CliOverrides};
pub use dataset_config::DatasetConfig;
pub use explorer_config::ExplorerConfig;
pub use graph_config::GraphConfig;
