//! Settings for the query layer consumed by front ends.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Cap on how many causes `list_causes` returns. `None` lists all.
    pub max_listed_causes: Option<usize>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_listed_causes: defaults::DEFAULT_MAX_LISTED_CAUSES,
        }
    }
}
