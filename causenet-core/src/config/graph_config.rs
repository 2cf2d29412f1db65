//! Graph-construction settings.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{GraphMode, ImpactPolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub mode: GraphMode,
    pub impact_policy: ImpactPolicy,
    /// Weight used when a descriptor's impact is absent or unconvertible.
    pub default_impact: f64,
    /// Divisor for hierarchical weights.
    pub weight_divisor: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            mode: GraphMode::default(),
            impact_policy: ImpactPolicy::default(),
            default_impact: defaults::DEFAULT_IMPACT,
            weight_divisor: defaults::DEFAULT_WEIGHT_DIVISOR,
        }
    }
}
