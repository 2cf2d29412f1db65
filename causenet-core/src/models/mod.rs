//! Domain data shapes shared by every stage of graph construction.

pub mod dataset;
pub mod graph_mode;
pub mod node_key;
pub mod relation;
pub mod stratum;

pub use dataset::{normalize_cause_id, CountryYears, Dataset, RawRow, RelationCell};
pub use graph_mode::{GraphMode, ImpactPolicy};
pub use node_key::{NodeKey, StratifiedKey};
pub use relation::{Impact, RelationDescriptor, RelationRole};
pub use stratum::{AgeBand, Sex};
