//! # causenet-graph
//!
//! Turns a table of causes of death into a directed graph and answers
//! neighborhood queries over it. Data flows one way:
//! rows → [`normalize`] → [`expansion`] → [`resolve`] → [`graph`].

pub mod engine;
pub mod expansion;
pub mod graph;
pub mod normalize;
pub mod query;
pub mod resolve;
pub mod source;

pub use engine::{build_graph, BuildOptions, BuildReport, CauseGraph};
pub use expansion::{CauseIndex, NodeExpander};
pub use graph::{EdgeWeight, GraphNode, GraphStore, SubgraphExport};
pub use normalize::{normalize_cell, parse_cell, validate_relations, RepairPipeline, RepairRule};
pub use query::{Exploration, ExplorationSession, ExplorationState, GraphHandle};
pub use resolve::EdgeResolver;
pub use source::{InMemorySource, JsonFileSource, JsonLinesSource};
