//! Serializable snapshot of a (sub)graph for rendering front ends.

use causenet_core::NodeKey;
use serde::{Deserialize, Serialize};

use super::store::GraphStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    pub key: NodeKey,
    pub label: String,
    pub short_label: String,
    pub total_deaths: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedEdge {
    /// Canonical label of the source node.
    pub source: String,
    /// Canonical label of the target node.
    pub target: String,
    pub impact: f64,
    pub weight: f64,
}

/// Nodes and weighted edges, in deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubgraphExport {
    pub nodes: Vec<ExportedNode>,
    pub edges: Vec<ExportedEdge>,
}

impl SubgraphExport {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl GraphStore {
    pub fn export(&self) -> SubgraphExport {
        SubgraphExport {
            nodes: self
                .nodes()
                .map(|node| ExportedNode {
                    key: node.key.clone(),
                    label: node.key.label(),
                    short_label: node.key.short_label(),
                    total_deaths: node.total_deaths,
                })
                .collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|(from, to, w)| ExportedEdge {
                    source: from.label(),
                    target: to.label(),
                    impact: w.impact,
                    weight: w.weight,
                })
                .collect(),
        }
    }
}
