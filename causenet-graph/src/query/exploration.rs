use causenet_core::NodeKey;
use serde::{Deserialize, Serialize};

/// Result of a one-hop successor lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exploration {
    /// Normalized cause id that was asked for.
    pub cause: String,
    /// First node registered for the cause.
    pub start: NodeKey,
    pub successors: Vec<NodeKey>,
}

impl Exploration {
    /// The start node followed by its successors.
    pub fn node_set(&self) -> impl Iterator<Item = &NodeKey> {
        std::iter::once(&self.start).chain(self.successors.iter())
    }

    /// `true` when the start node has no successor.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}
