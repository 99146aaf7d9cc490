//! Core graph generation pipeline.
//!
//! [`GraphGenerator`] holds a validated configuration and turns it into a
//! composite strategy: distinct node keys, optional node data, the planned
//! edge set, optional edge data, then assembly into the caller's graph
//! type. Draws are issued in that fixed order on every invocation so the
//! draw engine can replay and shrink a generated graph.

use std::{fmt, sync::Arc};

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use tracing::trace;

use crate::builder::DEFAULT_MAX_NODES;
use crate::sink::GraphSink;
use crate::topology::{self, EdgePlan};

/// A validated graph generation configuration.
///
/// Constructed by
/// [`GraphStrategyBuilder::build`](crate::GraphStrategyBuilder::build);
/// [`strategy`](Self::strategy) hands the composite strategy to the draw
/// engine. The generator owns no draw state itself: every sampled value is
/// built from a fresh graph instance and fresh draws, so independent
/// runners can share one generator.
pub struct GraphGenerator<G, K, N, E> {
    pub(crate) constructor: Arc<dyn Fn() -> G>,
    pub(crate) node_keys: BoxedStrategy<K>,
    pub(crate) node_data: Option<BoxedStrategy<N>>,
    pub(crate) edge_data: Option<BoxedStrategy<E>>,
    pub(crate) min_nodes: usize,
    pub(crate) max_nodes: Option<usize>,
    pub(crate) min_edges: usize,
    pub(crate) max_edges: Option<usize>,
    pub(crate) self_loops: bool,
    pub(crate) connected: bool,
}

impl<G, K, N, E> GraphGenerator<G, K, N, E> {
    /// Returns the configured lower node-count bound.
    #[must_use]
    pub const fn min_nodes(&self) -> usize {
        self.min_nodes
    }

    /// Returns the configured upper node-count bound.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Returns the configured lower edge-count bound.
    #[must_use]
    pub const fn min_edges(&self) -> usize {
        self.min_edges
    }

    /// Returns the configured upper edge-count bound.
    #[must_use]
    pub const fn max_edges(&self) -> Option<usize> {
        self.max_edges
    }

    /// Returns whether self-loops may be generated.
    #[must_use]
    pub const fn self_loops(&self) -> bool {
        self.self_loops
    }

    /// Returns whether generated graphs must be connected.
    #[must_use]
    pub const fn connected(&self) -> bool {
        self.connected
    }
}

impl<G, K, N, E> GraphGenerator<G, K, N, E>
where
    G: GraphSink<K, N, E> + fmt::Debug + 'static,
    K: Clone + Ord + fmt::Debug + 'static,
    N: Clone + Default + fmt::Debug + 'static,
    E: Clone + Default + fmt::Debug + 'static,
{
    /// Returns the composite strategy producing assembled graphs.
    ///
    /// One throwaway instance is built up front to probe the shape flags;
    /// after that, each sampled value consumes draws in a fixed order:
    /// node-key set, node data, spanning chain, edge top-up, edge data.
    ///
    /// Two behaviors are deliberate rather than errors:
    /// - when the candidate universe holds fewer pairs than `min_edges`,
    ///   the generated graph quietly carries fewer edges;
    /// - when connectivity is required, the spanning chain is emitted even
    ///   if a tight `max_edges` is exceeded by it.
    ///
    /// A node-key distribution too narrow to yield `min_nodes` distinct
    /// values surfaces as the draw engine's own rejection failure; the
    /// strategy never loops unboundedly on its side.
    #[must_use]
    pub fn strategy(&self) -> BoxedStrategy<G> {
        let probe = (self.constructor)();
        let plan_base = EdgePlan {
            nodes: 0,
            directed: probe.is_directed(),
            multigraph: probe.is_multigraph(),
            self_loops: self.self_loops,
            connected: self.connected,
            min_edges: self.min_edges,
            max_edges: self.max_edges,
        };
        let node_cap = self
            .max_nodes
            .unwrap_or_else(|| self.min_nodes.max(DEFAULT_MAX_NODES));
        let node_data = self.node_data.clone();
        let edge_data = self.edge_data.clone();
        let constructor = Arc::clone(&self.constructor);
        proptest::collection::btree_set(self.node_keys.clone(), self.min_nodes..=node_cap)
            .prop_flat_map(move |keys| {
                // Freeze the drawn set into an ordered sequence so every
                // later draw replays in the same order.
                let keys: Vec<K> = keys.into_iter().collect();
                let records = records_for(node_data.clone(), keys.len());
                let edges = topology::edge_set(EdgePlan {
                    nodes: keys.len(),
                    ..plan_base
                });
                (Just(keys), records, edges)
            })
            .prop_flat_map(move |(keys, node_records, edges)| {
                let edge_records = records_for(edge_data.clone(), edges.len());
                (Just(keys), Just(node_records), Just(edges), edge_records)
            })
            .prop_map(move |(keys, node_records, edges, edge_records)| {
                trace!(
                    nodes = keys.len(),
                    edges = edges.len(),
                    "assembling generated graph"
                );
                assemble(&constructor, &keys, node_records, &edges, edge_records)
            })
            .boxed()
    }
}

impl<G, K, N, E> fmt::Debug for GraphGenerator<G, K, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphGenerator")
            .field("min_nodes", &self.min_nodes)
            .field("max_nodes", &self.max_nodes)
            .field("min_edges", &self.min_edges)
            .field("max_edges", &self.max_edges)
            .field("self_loops", &self.self_loops)
            .field("connected", &self.connected)
            .finish_non_exhaustive()
    }
}

/// Per-item record vector: drawn from the configured distribution, or a
/// draw-free vector of defaults when none is configured.
fn records_for<T>(source: Option<BoxedStrategy<T>>, len: usize) -> BoxedStrategy<Vec<T>>
where
    T: Clone + Default + fmt::Debug + 'static,
{
    match source {
        Some(records) => proptest::collection::vec(records, len..=len).boxed(),
        None => Just(vec![T::default(); len]).boxed(),
    }
}

/// Populates a fresh graph instance: all nodes first, then all edges with
/// their endpoints relabeled from planned indices to drawn keys.
fn assemble<G, K, N, E>(
    constructor: &Arc<dyn Fn() -> G>,
    keys: &[K],
    node_records: Vec<N>,
    edges: &[(usize, usize)],
    edge_records: Vec<E>,
) -> G
where
    G: GraphSink<K, N, E>,
    K: Clone,
{
    let mut graph = (constructor)();
    for (key, record) in keys.iter().zip(node_records) {
        graph.add_node(key.clone(), record);
    }
    for (&(from, to), record) in edges.iter().zip(edge_records) {
        // Planned indices always address the drawn key sequence.
        if let (Some(from), Some(to)) = (keys.get(from), keys.get(to)) {
            graph.add_edge(from.clone(), to.clone(), record);
        }
    }
    graph
}
