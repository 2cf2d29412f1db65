//! Edge Resolver: relationship descriptors → directed, weighted edges.
//!
//! Counterparts absent from the [`CauseIndex`] are dangling references. They
//! produce no edge and are only counted.

use causenet_core::{GraphMode, NodeKey, RelationDescriptor};

use crate::expansion::CauseIndex;
use crate::graph::EdgeWeight;

/// An edge ready for insertion into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEdge {
    pub from: NodeKey,
    pub to: NodeKey,
    pub weight: EdgeWeight,
}

/// Edges produced for one row, plus the number of dangling counterparts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub edges: Vec<ResolvedEdge>,
    pub dangling: usize,
}

/// Resolves one row's relationship list against the cause index.
#[derive(Debug, Clone, Copy)]
pub struct EdgeResolver<'a> {
    index: &'a CauseIndex,
    mode: GraphMode,
    default_impact: f64,
    weight_divisor: f64,
}

impl<'a> EdgeResolver<'a> {
    pub fn new(index: &'a CauseIndex, mode: GraphMode, default_impact: f64, weight_divisor: f64) -> Self {
        Self {
            index,
            mode,
            default_impact,
            weight_divisor,
        }
    }

    /// Resolve the descriptors read from the row of `origin`.
    ///
    /// `total_deaths` is the yearly death count of that row; it only matters
    /// in hierarchical mode.
    pub fn resolve(&self, origin: &str, descriptors: &[RelationDescriptor], total_deaths: f64) -> Resolution {
        let mut resolution = Resolution::default();
        for descriptor in descriptors {
            let counterpart = descriptor.counterpart_id.as_str();
            if !self.index.contains(counterpart) {
                tracing::debug!(origin, counterpart, "dangling relationship reference");
                resolution.dangling += 1;
                continue;
            }
            let impact = descriptor.impact.resolve(self.default_impact);
            match self.mode {
                GraphMode::Stratified => {
                    self.resolve_stratified(origin, counterpart, impact, &mut resolution.edges)
                }
                GraphMode::Flat => resolution.edges.push(ResolvedEdge {
                    from: NodeKey::cause_node(origin),
                    to: NodeKey::cause_node(counterpart),
                    weight: EdgeWeight::from_impact(impact),
                }),
                GraphMode::Hierarchical => resolution.edges.push(ResolvedEdge {
                    from: NodeKey::cause_node(counterpart),
                    to: NodeKey::cause_node(origin),
                    weight: EdgeWeight {
                        impact,
                        weight: self.hierarchical_weight(impact, total_deaths),
                    },
                }),
            }
        }
        resolution
    }

    /// Cross product of both node lists, keeping only same-stratum pairs.
    fn resolve_stratified(&self, origin: &str, counterpart: &str, impact: f64, out: &mut Vec<ResolvedEdge>) {
        let targets = self.index.nodes(counterpart);
        for from in self.index.nodes(origin) {
            let Some(from_key) = from.as_stratified() else {
                continue;
            };
            for to in targets {
                let matches = to
                    .as_stratified()
                    .is_some_and(|to_key| from_key.same_stratum(to_key));
                if matches {
                    out.push(ResolvedEdge {
                        from: from.clone(),
                        to: to.clone(),
                        weight: EdgeWeight::from_impact(impact),
                    });
                }
            }
        }
    }

    fn hierarchical_weight(&self, impact: f64, total_deaths: f64) -> f64 {
        if self.weight_divisor == 0.0 {
            return 0.0;
        }
        impact * total_deaths / self.weight_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causenet_core::{AgeBand, Impact, Sex, StratifiedKey};

    fn node(cause: &str, sex: Sex, band: AgeBand, year: i32) -> NodeKey {
        StratifiedKey::new(cause, sex, band, "FRANCE", year).into()
    }

    fn descriptor(id: &str, impact: Impact) -> RelationDescriptor {
        RelationDescriptor {
            counterpart_id: id.to_string(),
            impact,
        }
    }

    #[test]
    fn stratified_keeps_only_matching_strata() {
        let mut index = CauseIndex::new();
        index.register(node("stroke", Sex::Male, AgeBand::From65, 2010));
        index.register(node("heart failure", Sex::Male, AgeBand::From65, 2010));
        index.register(node("heart failure", Sex::Female, AgeBand::UpTo4, 2010));

        let resolver = EdgeResolver::new(&index, GraphMode::Stratified, 0.1, 1200.0);
        let out = resolver.resolve(
            "stroke",
            &[descriptor("heart failure", Impact::Numeric(0.4))],
            0.0,
        );
        assert_eq!(out.dangling, 0);
        assert_eq!(out.edges.len(), 1);
        let edge = &out.edges[0];
        assert_eq!(edge.from, node("stroke", Sex::Male, AgeBand::From65, 2010));
        assert_eq!(edge.to, node("heart failure", Sex::Male, AgeBand::From65, 2010));
        assert_eq!(edge.weight.weight, 0.4);
    }

    #[test]
    fn dangling_counterpart_is_counted() {
        let mut index = CauseIndex::new();
        index.register(NodeKey::cause_node("stroke"));
        let resolver = EdgeResolver::new(&index, GraphMode::Flat, 0.1, 1200.0);
        let out = resolver.resolve("stroke", &[descriptor("ghost", Impact::Absent)], 0.0);
        assert!(out.edges.is_empty());
        assert_eq!(out.dangling, 1);
    }

    #[test]
    fn flat_edge_uses_default_impact() {
        let mut index = CauseIndex::new();
        index.register(NodeKey::cause_node("stroke"));
        index.register(NodeKey::cause_node("heart failure"));
        let resolver = EdgeResolver::new(&index, GraphMode::Flat, 0.1, 1200.0);
        let out = resolver.resolve("stroke", &[descriptor("heart failure", Impact::Absent)], 0.0);
        assert_eq!(out.edges[0].from, NodeKey::cause_node("stroke"));
        assert_eq!(out.edges[0].weight, EdgeWeight::from_impact(0.1));
    }

    #[test]
    fn hierarchical_edge_points_at_concept() {
        let mut index = CauseIndex::new();
        index.register(NodeKey::cause_node("sepsis"));
        index.register(NodeKey::cause_node("pneumonia"));
        let resolver = EdgeResolver::new(&index, GraphMode::Hierarchical, 0.1, 1200.0);

        let out = resolver.resolve("sepsis", &[descriptor("pneumonia", Impact::Numeric(0.5))], 2400.0);
        let edge = &out.edges[0];
        assert_eq!(edge.from, NodeKey::cause_node("pneumonia"));
        assert_eq!(edge.to, NodeKey::cause_node("sepsis"));
        assert_eq!(edge.weight.impact, 0.5);
        assert_eq!(edge.weight.weight, 1.0);

        let out = resolver.resolve(
            "sepsis",
            &[descriptor("pneumonia", Impact::Unparsed("high".into()))],
            1200.0,
        );
        assert_eq!(out.edges[0].weight.impact, 0.1);
        assert!((out.edges[0].weight.weight - 0.1).abs() < 1e-12);

        let out = resolver.resolve("sepsis", &[descriptor("pneumonia", Impact::Numeric(0.5))], 0.0);
        assert_eq!(out.edges[0].weight.weight, 0.0);
    }
}
