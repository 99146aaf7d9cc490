//! Test fixtures shared by the core test suites.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use proptest::strategy::{BoxedStrategy, Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

use crate::sink::GraphSink;

/// In-memory recording sink used to audit generated graphs.
///
/// Records every insertion verbatim, with the shape flags chosen at
/// construction, so tests can check the generator's structural guarantees
/// without a real graph library in the loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MemoryGraph<K, N, E> {
    directed: bool,
    multigraph: bool,
    nodes: Vec<(K, N)>,
    edges: Vec<(K, K, E)>,
}

impl<K, N, E> MemoryGraph<K, N, E> {
    pub(crate) fn new(directed: bool, multigraph: bool) -> Self {
        Self {
            directed,
            multigraph,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn undirected() -> Self {
        Self::new(false, false)
    }

    pub(crate) fn directed() -> Self {
        Self::new(true, false)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn nodes(&self) -> &[(K, N)] {
        &self.nodes
    }

    pub(crate) fn edges(&self) -> &[(K, K, E)] {
        &self.edges
    }
}

impl<K: Ord, N, E> MemoryGraph<K, N, E> {
    pub(crate) fn has_duplicate_keys(&self) -> bool {
        let distinct: BTreeSet<&K> = self.nodes.iter().map(|(key, _)| key).collect();
        distinct.len() != self.nodes.len()
    }

    pub(crate) fn has_dangling_endpoint(&self) -> bool {
        let keys: BTreeSet<&K> = self.nodes.iter().map(|(key, _)| key).collect();
        self.edges
            .iter()
            .any(|(from, to, _)| !keys.contains(from) || !keys.contains(to))
    }

    pub(crate) fn self_loop_count(&self) -> usize {
        self.edges.iter().filter(|(from, to, _)| from == to).count()
    }

    /// Whether the undirected reachability graph over all edges spans every
    /// node in a single component. Direction is ignored, so this checks
    /// weak connectivity for directed graphs.
    pub(crate) fn is_connected(&self) -> bool {
        if self.nodes.len() < 2 {
            return true;
        }
        let slots: BTreeMap<&K, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, (key, _))| (key, slot))
            .collect();
        let mut components = DisjointSet::new(self.nodes.len());
        for (from, to, _) in &self.edges {
            if let (Some(&from), Some(&to)) = (slots.get(from), slots.get(to)) {
                components.union(from, to);
            }
        }
        let root = components.find(0);
        (1..self.nodes.len()).all(|slot| components.find(slot) == root)
    }
}

impl<K, N, E> GraphSink<K, N, E> for MemoryGraph<K, N, E> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_multigraph(&self) -> bool {
        self.multigraph
    }

    fn add_node(&mut self, key: K, data: N) {
        self.nodes.push((key, data));
    }

    fn add_edge(&mut self, from: K, to: K, data: E) {
        self.edges.push((from, to, data));
    }
}

/// Union-find over node slots, used for the connectivity audit.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[slot] != slot {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }
        root
    }

    fn union(&mut self, left: usize, right: usize) {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return;
        }
        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
    }
}

/// Draws one value from `strategy` with a runner seeded from `seed`, so two
/// calls with the same seed replay the same draw sequence.
pub(crate) fn sample_once<T: fmt::Debug>(strategy: &BoxedStrategy<T>, seed: [u8; 32]) -> T {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &seed);
    let mut runner = TestRunner::new_with_rng(Config::default(), rng);
    strategy
        .new_tree(&mut runner)
        .expect("strategy must produce a value")
        .current()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_audit_sees_through_edge_direction() {
        let mut graph: MemoryGraph<u8, (), ()> = MemoryGraph::directed();
        for key in 0..3 {
            graph.add_node(key, ());
        }
        graph.add_edge(2, 0, ());
        graph.add_edge(2, 1, ());
        assert!(graph.is_connected());
    }

    #[test]
    fn disconnected_pair_fails_the_audit() {
        let mut graph: MemoryGraph<u8, (), ()> = MemoryGraph::undirected();
        graph.add_node(0, ());
        graph.add_node(1, ());
        assert!(!graph.is_connected());
    }

    #[test]
    fn audits_report_duplicates_loops_and_dangling_endpoints() {
        let mut graph: MemoryGraph<u8, (), ()> = MemoryGraph::undirected();
        graph.add_node(0, ());
        graph.add_node(0, ());
        graph.add_edge(0, 0, ());
        graph.add_edge(0, 9, ());
        assert!(graph.has_duplicate_keys());
        assert_eq!(graph.self_loop_count(), 1);
        assert!(graph.has_dangling_endpoint());
    }
}
