//! Shared handle over the live graph.
//!
//! Readers clone the `Arc` and never hold the lock while querying. A reload
//! builds the replacement completely before swapping it in, so readers never
//! see a partial graph and a failed load leaves the live graph in place.

use std::sync::{Arc, RwLock};

use causenet_core::{CausenetError, CausenetResult, DatasetSource};

use crate::engine::{build_graph, BuildOptions, CauseGraph};

#[derive(Debug)]
pub struct GraphHandle {
    live: RwLock<Arc<CauseGraph>>,
}

impl GraphHandle {
    pub fn new(graph: CauseGraph) -> Self {
        Self {
            live: RwLock::new(Arc::new(graph)),
        }
    }

    /// Load `source` and build the initial graph.
    pub fn load(source: &dyn DatasetSource, options: &BuildOptions) -> CausenetResult<Self> {
        let dataset = source.load()?;
        Ok(Self::new(build_graph(&dataset, options)))
    }

    /// The graph currently being served.
    pub fn current(&self) -> CausenetResult<Arc<CauseGraph>> {
        let guard = self
            .live
            .read()
            .map_err(|e| CausenetError::Concurrency(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }

    /// Rebuild from `source` and swap the result in. Returns the new graph.
    pub fn reload(
        &self,
        source: &dyn DatasetSource,
        options: &BuildOptions,
    ) -> CausenetResult<Arc<CauseGraph>> {
        let dataset = source.load()?;
        let fresh = Arc::new(build_graph(&dataset, options));
        let mut guard = self
            .live
            .write()
            .map_err(|e| CausenetError::Concurrency(e.to_string()))?;
        *guard = Arc::clone(&fresh);
        tracing::info!(
            source = %source.describe(),
            nodes = fresh.node_count(),
            edges = fresh.edge_count(),
            "graph reloaded"
        );
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use causenet_core::errors::SourceError;
    use causenet_core::{Dataset, GraphMode, RawRow};

    struct Broken;

    impl DatasetSource for Broken {
        fn load(&self) -> CausenetResult<Dataset> {
            Err(SourceError::Unreadable {
                path: "broken".into(),
                message: "gone".into(),
            }
            .into())
        }
    }

    fn options() -> BuildOptions {
        BuildOptions::default().with_mode(GraphMode::Flat)
    }

    fn rows(causes: &[&str]) -> InMemorySource {
        InMemorySource::new(
            causes
                .iter()
                .map(|c| RawRow::new().with("concept_id", *c))
                .collect(),
        )
    }

    #[test]
    fn reload_swaps_graph() {
        let handle = GraphHandle::load(&rows(&["stroke"]), &options()).unwrap();
        let before = handle.current().unwrap();
        handle.reload(&rows(&["stroke", "sepsis"]), &options()).unwrap();
        assert_eq!(before.node_count(), 1);
        assert_eq!(handle.current().unwrap().node_count(), 2);
    }

    #[test]
    fn failed_reload_keeps_live_graph() {
        let handle = GraphHandle::load(&rows(&["stroke"]), &options()).unwrap();
        assert!(handle.reload(&Broken, &options()).is_err());
        assert_eq!(handle.current().unwrap().list_causes(), vec!["stroke"]);
    }

    #[test]
    fn concurrent_readers_see_whole_graphs() {
        let handle = Arc::new(GraphHandle::load(&rows(&["a"]), &options()).unwrap());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let count = handle.current().unwrap().node_count();
                        assert!(count == 1 || count == 3);
                    }
                })
            })
            .collect();
        handle.reload(&rows(&["a", "b", "c"]), &options()).unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
