//! petgraph::StableGraph wrapper with GraphNode and EdgeWeight types.
//!
//! At most one edge per ordered node pair: re-adding a pair overwrites its
//! weight. Node insertion is idempotent on the key.

use causenet_core::NodeKey;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::{Directed, Direction};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// A node and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub key: NodeKey,
    /// Yearly deaths of the cause, for cause-level graphs.
    pub total_deaths: Option<f64>,
}

/// Weight on a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeight {
    /// Impact after defaulting.
    pub impact: f64,
    /// Effective weight. Equals `impact` except in hierarchical mode.
    pub weight: f64,
}

impl EdgeWeight {
    pub fn from_impact(impact: f64) -> Self {
        Self {
            impact,
            weight: impact,
        }
    }
}

/// The underlying directed graph type.
pub type CauseStableGraph = StableGraph<GraphNode, EdgeWeight, Directed>;

/// Directed graph with O(1) key lookup.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    graph: CauseStableGraph,
    node_index: FxHashMap<NodeKey, NodeIndex>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `key`.
    pub fn add_node(&mut self, key: NodeKey) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            key: key.clone(),
            total_deaths: None,
        });
        self.node_index.insert(key, idx);
        idx
    }

    /// Get or create the node for `key` and set its death total.
    pub fn add_node_with_deaths(&mut self, key: NodeKey, total_deaths: Option<f64>) -> NodeIndex {
        let idx = self.add_node(key);
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.total_deaths = total_deaths;
        }
        idx
    }

    /// Add `from → to`, creating either endpoint if needed. Returns `true` if
    /// the edge is new, `false` if an existing edge's weight was replaced.
    pub fn add_edge(&mut self, from: NodeKey, to: NodeKey, weight: EdgeWeight) -> bool {
        let source = self.add_node(from);
        let target = self.add_node(to);
        match self.graph.find_edge(source, target) {
            Some(edge) => {
                if let Some(w) = self.graph.edge_weight_mut(edge) {
                    *w = weight;
                }
                false
            }
            None => {
                self.graph.add_edge(source, target, weight);
                true
            }
        }
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.node_index.contains_key(key)
    }

    pub fn node(&self, key: &NodeKey) -> Option<&GraphNode> {
        self.node_index
            .get(key)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn edge_weight(&self, from: &NodeKey, to: &NodeKey) -> Option<&EdgeWeight> {
        let source = *self.node_index.get(from)?;
        let target = *self.node_index.get(to)?;
        let edge = self.graph.find_edge(source, target)?;
        self.graph.edge_weight(edge)
    }

    /// Direct successors in node insertion order. Empty for unknown keys.
    pub fn successors(&self, key: &NodeKey) -> Vec<&NodeKey> {
        self.neighbors(key, Direction::Outgoing)
    }

    /// Direct predecessors in node insertion order. Empty for unknown keys.
    pub fn predecessors(&self, key: &NodeKey) -> Vec<&NodeKey> {
        self.neighbors(key, Direction::Incoming)
    }

    fn neighbors(&self, key: &NodeKey, direction: Direction) -> Vec<&NodeKey> {
        let Some(&idx) = self.node_index.get(key) else {
            return Vec::new();
        };
        let mut found: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        found.sort_unstable();
        found.dedup();
        found
            .into_iter()
            .filter_map(|n| self.graph.node_weight(n).map(|node| &node.key))
            .collect()
    }

    /// The subgraph on `keys` (unknown keys are ignored) with every edge whose
    /// endpoints are both inside.
    pub fn induced_subgraph<'a, I>(&self, keys: I) -> GraphStore
    where
        I: IntoIterator<Item = &'a NodeKey>,
    {
        let mut inside: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut sub = GraphStore::new();
        for key in keys {
            if let Some(&idx) = self.node_index.get(key) {
                if inside.insert(idx) {
                    if let Some(node) = self.graph.node_weight(idx) {
                        sub.add_node_with_deaths(node.key.clone(), node.total_deaths);
                    }
                }
            }
        }
        for edge in self.sorted_edges() {
            if inside.contains(&edge.source()) && inside.contains(&edge.target()) {
                if let (Some(from), Some(to)) = (
                    self.graph.node_weight(edge.source()),
                    self.graph.node_weight(edge.target()),
                ) {
                    sub.add_edge(from.key.clone(), to.key.clone(), *edge.weight());
                }
            }
        }
        sub
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Edges ordered by (source, target) insertion order.
    pub fn edges(&self) -> Vec<(&NodeKey, &NodeKey, &EdgeWeight)> {
        self.sorted_edges()
            .into_iter()
            .filter_map(|edge| {
                let from = self.graph.node_weight(edge.source())?;
                let to = self.graph.node_weight(edge.target())?;
                Some((&from.key, &to.key, edge.weight()))
            })
            .collect()
    }

    fn sorted_edges(&self) -> Vec<petgraph::stable_graph::EdgeReference<'_, EdgeWeight>> {
        let mut edges: Vec<_> = self.graph.edge_references().collect();
        edges.sort_by_key(|e| (e.source(), e.target()));
        edges
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
