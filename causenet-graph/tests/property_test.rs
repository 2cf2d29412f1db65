//! Property tests for graph construction: stratum matching, idempotent
//! insertion, and fan-out size.

use proptest::prelude::*;

use causenet_core::{AgeBand, CountryYears, Dataset, GraphMode, NodeKey, Sex};
use causenet_graph::{build_graph, BuildOptions, GraphStore, NodeExpander};
use test_fixtures::{stratified_row, with_successors, COUNTRY};

fn stratum_strategy() -> impl Strategy<Value = Vec<(Sex, AgeBand)>> {
    prop::collection::btree_set((0usize..2, 0usize..3), 0..=6).prop_map(|set| {
        set.into_iter()
            .map(|(s, b)| (Sex::ALL[s], AgeBand::ALL[b]))
            .collect()
    })
}

fn cause_name(i: usize) -> String {
    format!("cause {i}")
}

// =============================================================================
// Every stratified edge stays inside one (sex, age band, country) stratum
// =============================================================================
proptest! {
    #[test]
    fn stratified_edges_never_cross_strata(
        strata in prop::collection::vec(stratum_strategy(), 2..6),
        links in prop::collection::vec((0usize..6, 0usize..6), 0..12),
        years in prop::collection::btree_set(2000i32..2020, 1..4),
    ) {
        let n = strata.len();
        let mut rows = Vec::new();
        for (i, cells) in strata.iter().enumerate() {
            let successors: Vec<String> = links
                .iter()
                .filter(|(from, _)| *from % n == i)
                .map(|(_, to)| format!("{{'successor_id': '{}'}}", cause_name(*to % n)))
                .collect();
            let cell = format!("[{}]", successors.join(" "));
            let row = stratified_row(&cause_name(i), cells, 2000);
            rows.push(with_successors(row, &cell));
        }
        for year in &years {
            rows.push(stratified_row("calendar", &[], *year));
        }

        let graph = build_graph(&Dataset::new(rows), &BuildOptions::default());
        for (from, to, weight) in graph.store().edges() {
            let from = from.as_stratified().unwrap();
            let to = to.as_stratified().unwrap();
            prop_assert_eq!(from.sex, to.sex);
            prop_assert_eq!(from.age_band, to.age_band);
            prop_assert_eq!(&from.country, &to.country);
            prop_assert_eq!(weight.weight, 0.1);
        }
    }
}

// =============================================================================
// Re-inserting keys never changes the node count
// =============================================================================
proptest! {
    #[test]
    fn node_insertion_is_idempotent(
        causes in prop::collection::vec(0usize..8, 1..40),
    ) {
        let mut store = GraphStore::new();
        for c in &causes {
            store.add_node(NodeKey::cause_node(cause_name(*c)));
        }
        let count = store.node_count();
        for c in &causes {
            store.add_node(NodeKey::cause_node(cause_name(*c)));
        }
        let distinct: std::collections::BTreeSet<_> = causes.iter().collect();
        prop_assert_eq!(store.node_count(), count);
        prop_assert_eq!(count, distinct.len());
    }
}

// =============================================================================
// k populated cells × Y years = k × Y nodes
// =============================================================================
proptest! {
    #[test]
    fn fan_out_is_k_times_y(
        cells in stratum_strategy(),
        years in prop::collection::btree_set(1990i32..2030, 0..6),
    ) {
        let years: Vec<i32> = years.into_iter().collect();
        let country_years = CountryYears::new().with(COUNTRY, years.clone());
        let expander = NodeExpander::new(GraphMode::Stratified, vec![COUNTRY.to_string()]);
        let row = stratified_row("stroke", &cells, 2000);
        let nodes = expander.expand_row(&row, &country_years);
        prop_assert_eq!(nodes.len(), cells.len() * years.len());
    }
}
