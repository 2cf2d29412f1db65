//! Graph Store: petgraph `StableGraph` keyed by [`NodeKey`](causenet_core::NodeKey).

pub mod export;
pub mod store;

pub use export::{ExportedEdge, ExportedNode, SubgraphExport};
pub use store::{EdgeWeight, GraphNode, GraphStore};
