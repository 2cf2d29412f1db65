//! Graph construction and the read-only query surface over a built graph.
//!
//! [`build_graph`] is a pure function of the dataset and the options. It runs
//! in two passes: first every row is expanded into nodes so the cause index is
//! complete, then every row's relation cell is resolved into edges.

use causenet_core::errors::LookupError;
use causenet_core::{
    normalize_cause_id, CausenetConfig, Dataset, GraphMode, ImpactPolicy, NodeKey,
};
use serde::{Deserialize, Serialize};

use crate::expansion::{CauseIndex, NodeExpander};
use crate::graph::{GraphStore, SubgraphExport};
use crate::normalize::{read_relations, CellOutcome};
use crate::query::Exploration;
use crate::resolve::EdgeResolver;

/// Everything graph construction needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub mode: GraphMode,
    pub impact_policy: ImpactPolicy,
    pub default_impact: f64,
    pub weight_divisor: f64,
    /// Countries whose strata are expanded. The first one also supplies the
    /// death totals of cause-level nodes.
    pub countries: Vec<String>,
    pub max_listed_causes: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from_config(&CausenetConfig::default())
    }
}

impl BuildOptions {
    pub fn from_config(config: &CausenetConfig) -> Self {
        Self {
            mode: config.graph.mode,
            impact_policy: config.graph.impact_policy,
            default_impact: config.graph.default_impact,
            weight_divisor: config.graph.weight_divisor,
            countries: config.dataset.countries.clone(),
            max_listed_causes: config.explorer.max_listed_causes,
        }
    }

    pub fn with_mode(mut self, mode: GraphMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_impact_policy(mut self, policy: ImpactPolicy) -> Self {
        self.impact_policy = policy;
        self
    }
}

/// Counters collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub rows_seen: usize,
    /// Rows that contributed no node (no cause id, or no populated stratum).
    pub rows_skipped: usize,
    pub nodes: usize,
    pub edges: usize,
    pub cells_unparseable: usize,
    pub lists_rejected: usize,
    pub dangling_references: usize,
}

/// An immutable, fully built cause graph.
#[derive(Debug, Clone)]
pub struct CauseGraph {
    store: GraphStore,
    index: CauseIndex,
    mode: GraphMode,
    report: BuildReport,
    max_listed_causes: Option<usize>,
}

/// Build a [`CauseGraph`] from scratch.
pub fn build_graph(dataset: &Dataset, options: &BuildOptions) -> CauseGraph {
    let expander = NodeExpander::new(options.mode, options.countries.clone());
    let years = match options.mode {
        GraphMode::Stratified => dataset.country_years(&options.countries),
        GraphMode::Flat | GraphMode::Hierarchical => Default::default(),
    };

    let mut store = GraphStore::new();
    let mut index = CauseIndex::new();
    let mut report = BuildReport {
        rows_seen: dataset.len(),
        ..BuildReport::default()
    };

    for row in dataset.rows() {
        let nodes = expander.expand_row(row, &years);
        if nodes.is_empty() {
            report.rows_skipped += 1;
            continue;
        }
        let total_deaths = match options.mode {
            GraphMode::Stratified => None,
            GraphMode::Flat | GraphMode::Hierarchical => Some(expander.total_deaths(row)),
        };
        for key in nodes {
            // The first row of a cause sizes its node.
            if index.register(key.clone()) {
                store.add_node_with_deaths(key, total_deaths);
            }
        }
    }

    let resolver = EdgeResolver::new(
        &index,
        options.mode,
        options.default_impact,
        options.weight_divisor,
    );
    let role = options.mode.relation_role();
    for row in dataset.rows() {
        let Some(cause) = row.concept_id() else {
            continue;
        };
        let descriptors = match read_relations(row, role, options.impact_policy) {
            CellOutcome::Valid(list) => list,
            CellOutcome::Empty => continue,
            CellOutcome::Unparseable(e) => {
                tracing::debug!(cause = %cause, error = %e, "relation cell unparseable");
                report.cells_unparseable += 1;
                continue;
            }
            CellOutcome::Rejected(e) => {
                tracing::debug!(cause = %cause, error = %e, "relation list rejected");
                report.lists_rejected += 1;
                continue;
            }
        };
        let resolution = resolver.resolve(&cause, &descriptors, expander.total_deaths(row));
        report.dangling_references += resolution.dangling;
        for edge in resolution.edges {
            store.add_edge(edge.from, edge.to, edge.weight);
        }
    }

    report.nodes = store.node_count();
    report.edges = store.edge_count();
    tracing::info!(
        mode = %options.mode,
        rows = report.rows_seen,
        nodes = report.nodes,
        edges = report.edges,
        dangling = report.dangling_references,
        "cause graph built"
    );

    CauseGraph {
        store,
        index,
        mode: options.mode,
        report,
        max_listed_causes: options.max_listed_causes,
    }
}

impl CauseGraph {
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn index(&self) -> &CauseIndex {
        &self.index
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Known causes in sorted order, capped at `max_listed_causes`.
    pub fn list_causes(&self) -> Vec<&str> {
        let limit = self.max_listed_causes.unwrap_or(usize::MAX);
        self.index.causes().take(limit).collect()
    }

    /// The first node of `cause` and its direct successors.
    pub fn neighbors_one_hop(&self, cause: &str) -> Result<Exploration, LookupError> {
        let normalized = normalize_cause_id(cause);
        let start = self
            .index
            .first_node(&normalized)
            .ok_or_else(|| LookupError::CauseNotFound {
                cause: cause.trim().to_string(),
            })?;
        let successors = self.store.successors(start).into_iter().cloned().collect();
        Ok(Exploration {
            cause: normalized,
            start: start.clone(),
            successors,
        })
    }

    /// Nodes of `keys` with every edge between them.
    pub fn export_subgraph<'a, I>(&self, keys: I) -> SubgraphExport
    where
        I: IntoIterator<Item = &'a NodeKey>,
    {
        self.store.induced_subgraph(keys).export()
    }

    pub fn export_full(&self) -> SubgraphExport {
        self.store.export()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causenet_core::RawRow;

    fn flat_dataset() -> Dataset {
        Dataset::new(vec![
            RawRow::new()
                .with("concept_id", "stroke")
                .with("successor_array", "[{'successor_id': 'heart failure', 'impact': 0.4}]"),
            RawRow::new().with("concept_id", "heart failure"),
            RawRow::new().with("successor_array", "[]"),
        ])
    }

    #[test]
    fn flat_build_reports_counts() {
        let options = BuildOptions::default().with_mode(GraphMode::Flat);
        let graph = build_graph(&flat_dataset(), &options);
        let report = graph.report();
        assert_eq!(report.rows_seen, 3);
        assert_eq!(report.rows_skipped, 1);
        assert_eq!((report.nodes, report.edges), (2, 1));
        assert_eq!(graph.list_causes(), vec!["heart failure", "stroke"]);
    }

    #[test]
    fn unknown_cause_is_lookup_error() {
        let graph = build_graph(&flat_dataset(), &BuildOptions::default().with_mode(GraphMode::Flat));
        let err = graph.neighbors_one_hop("cholera").unwrap_err();
        assert_eq!(
            err,
            LookupError::CauseNotFound {
                cause: "cholera".to_string()
            }
        );
    }

    #[test]
    fn lookup_normalizes_the_cause() {
        let graph = build_graph(&flat_dataset(), &BuildOptions::default().with_mode(GraphMode::Flat));
        let found = graph.neighbors_one_hop("  Stroke ").unwrap();
        assert_eq!(found.cause, "stroke");
        assert_eq!(found.successors, vec![NodeKey::cause_node("heart failure")]);
    }

    #[test]
    fn duplicate_cause_rows_keep_first_total() {
        let dataset = Dataset::new(vec![
            RawRow::new()
                .with("concept_id", "stroke")
                .with("total_yr_deaths_FRANCE", 42000),
            RawRow::new()
                .with("concept_id", "Stroke")
                .with("total_yr_deaths_FRANCE", 7),
        ]);
        for mode in [GraphMode::Flat, GraphMode::Hierarchical] {
            let graph = build_graph(&dataset, &BuildOptions::default().with_mode(mode));
            assert_eq!(graph.node_count(), 1);
            let node = graph.store().node(&NodeKey::cause_node("stroke")).unwrap();
            assert_eq!(node.total_deaths, Some(42000.0));
        }
    }

    #[test]
    fn list_causes_honours_limit() {
        let mut options = BuildOptions::default().with_mode(GraphMode::Flat);
        options.max_listed_causes = Some(1);
        let graph = build_graph(&flat_dataset(), &options);
        assert_eq!(graph.list_causes(), vec!["heart failure"]);
    }
}
