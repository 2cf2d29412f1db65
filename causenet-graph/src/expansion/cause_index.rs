//! Bare cause id → every node registered for that cause.

use std::collections::BTreeMap;

use causenet_core::NodeKey;
use rustc_hash::FxHashSet;

/// Identity-resolution index used by the edge resolver.
///
/// Causes iterate in sorted order; the nodes of one cause keep registration
/// order, so "the first node of a cause" is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CauseIndex {
    by_cause: BTreeMap<String, Vec<NodeKey>>,
    seen: FxHashSet<NodeKey>,
}

impl CauseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` under its cause. Returns `false` if it was already known.
    pub fn register(&mut self, key: NodeKey) -> bool {
        if !self.seen.insert(key.clone()) {
            return false;
        }
        self.by_cause
            .entry(key.cause().to_string())
            .or_default()
            .push(key);
        true
    }

    pub fn contains(&self, cause: &str) -> bool {
        self.by_cause.contains_key(cause)
    }

    /// Nodes of `cause`; empty when unknown.
    pub fn nodes(&self, cause: &str) -> &[NodeKey] {
        self.by_cause.get(cause).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_node(&self, cause: &str) -> Option<&NodeKey> {
        self.nodes(cause).first()
    }

    /// Causes in sorted order.
    pub fn causes(&self) -> impl Iterator<Item = &str> {
        self.by_cause.keys().map(String::as_str)
    }

    pub fn cause_count(&self) -> usize {
        self.by_cause.len()
    }

    pub fn node_count(&self) -> usize {
        self.seen.len()
    }
}
