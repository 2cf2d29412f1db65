//! The dataset-source collaborator: how rows reach the engine is its business.

use crate::errors::CausenetResult;
use crate::models::Dataset;

/// Provides the raw row table. Loading either completes or fails as a whole;
/// a failure here is the only thing that aborts a graph build.
pub trait DatasetSource {
    /// Load every row.
    fn load(&self) -> CausenetResult<Dataset>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String {
        "dataset".to_string()
    }
}
