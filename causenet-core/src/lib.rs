//! # causenet-core
//!
//! Foundation crate for the causenet cause-of-death graph engine.
//! Defines the domain types, errors, config, constants, tracing setup and the
//! dataset-source contract. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausenetConfig;
pub use errors::{CausenetError, CausenetResult};
pub use models::{
    normalize_cause_id, AgeBand, CountryYears, Dataset, GraphMode, Impact, ImpactPolicy, NodeKey,
    RawRow, RelationCell, RelationDescriptor, RelationRole, Sex, StratifiedKey,
};
pub use traits::DatasetSource;
