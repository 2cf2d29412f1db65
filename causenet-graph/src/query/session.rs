//! Exploration session: `Idle → Queried → Displayed → Idle`.
//!
//! Only the latest successful result is retained. A failed lookup returns the
//! session to `Idle` and keeps the previous result.

use causenet_core::errors::LookupError;
use serde::{Deserialize, Serialize};

use super::Exploration;
use crate::engine::CauseGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExplorationState {
    #[default]
    Idle,
    Queried,
    Displayed,
}

#[derive(Debug, Default)]
pub struct ExplorationSession {
    state: ExplorationState,
    last_result: Option<Exploration>,
}

impl ExplorationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// Run a one-hop lookup for `cause` and cache it as the last result.
    pub fn explore(&mut self, graph: &CauseGraph, cause: &str) -> Result<&Exploration, LookupError> {
        self.state = ExplorationState::Queried;
        match graph.neighbors_one_hop(cause) {
            Ok(found) => {
                tracing::debug!(
                    cause = %found.cause,
                    successors = found.successors.len(),
                    "exploration cached"
                );
                self.state = ExplorationState::Displayed;
                let cached = self.last_result.insert(found);
                Ok(&*cached)
            }
            Err(e) => {
                self.state = ExplorationState::Idle;
                Err(e)
            }
        }
    }

    /// Leave the displayed result and go back to `Idle`.
    pub fn finish(&mut self) {
        self.state = ExplorationState::Idle;
    }

    pub fn last_result(&self) -> Option<&Exploration> {
        self.last_result.as_ref()
    }

    pub fn require_last_result(&self) -> Result<&Exploration, LookupError> {
        self.last_result.as_ref().ok_or(LookupError::NoResultYet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{build_graph, BuildOptions};
    use causenet_core::{Dataset, GraphMode, RawRow};

    fn graph() -> CauseGraph {
        let dataset = Dataset::new(vec![
            RawRow::new()
                .with("concept_id", "stroke")
                .with("successor_array", "[{'successor_id': 'heart failure'}]"),
            RawRow::new().with("concept_id", "heart failure"),
        ]);
        build_graph(&dataset, &BuildOptions::default().with_mode(GraphMode::Flat))
    }

    #[test]
    fn explore_then_finish() {
        let graph = graph();
        let mut session = ExplorationSession::new();
        assert_eq!(session.require_last_result(), Err(LookupError::NoResultYet));

        session.explore(&graph, "stroke").unwrap();
        assert_eq!(session.state(), ExplorationState::Displayed);
        assert_eq!(session.last_result().unwrap().successors.len(), 1);

        session.finish();
        assert_eq!(session.state(), ExplorationState::Idle);
        assert!(session.last_result().is_some());
    }

    #[test]
    fn failed_lookup_keeps_previous_result() {
        let graph = graph();
        let mut session = ExplorationSession::new();
        session.explore(&graph, "stroke").unwrap();
        assert!(session.explore(&graph, "cholera").is_err());
        assert_eq!(session.state(), ExplorationState::Idle);
        assert_eq!(session.require_last_result().unwrap().cause, "stroke");
    }

    #[test]
    fn next_query_overwrites_result() {
        let graph = graph();
        let mut session = ExplorationSession::new();
        session.explore(&graph, "stroke").unwrap();
        session.explore(&graph, "heart failure").unwrap();
        let last = session.require_last_result().unwrap();
        assert_eq!(last.cause, "heart failure");
        assert!(last.is_empty());
    }
}
