//! petgraph sinks for ramify graph generation.
//!
//! Two petgraph representations are covered. [`KeyedGraph`] wraps
//! [`petgraph::Graph`], which keeps parallel edges, so the generator applies
//! multigraph candidate rules to it. [`petgraph::graphmap::GraphMap`] is
//! covered directly: its nodes are their own identifiers and repeated edges
//! replace one another, matching simple-graph rules.

use petgraph::EdgeType;
use petgraph::graph::Graph;
use petgraph::graphmap::{GraphMap, NodeTrait};
use ramify_core::GraphSink;

/// [`petgraph::Graph`] wrapper addressing nodes by generated key.
///
/// `petgraph::Graph` identifies nodes by internal index, so the wrapper
/// stores each generated key inside the node weight and resolves edge
/// endpoints with a scan at insertion time. Parallel edges are kept, which
/// makes the sink a multigraph to the generator.
///
/// # Examples
/// ```
/// use petgraph::Undirected;
/// use ramify_core::GraphSink;
/// use ramify_providers_petgraph::KeyedGraph;
///
/// let mut graph: KeyedGraph<char, u8, i16, Undirected> = KeyedGraph::new();
/// graph.add_node('a', 1);
/// graph.add_node('b', 2);
/// graph.add_edge('a', 'b', -3);
/// assert_eq!(graph.graph().node_count(), 2);
/// assert_eq!(graph.graph().edge_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct KeyedGraph<K, N, E, Ty: EdgeType> {
    graph: Graph<(K, N), E, Ty>,
}

/// Undirected [`KeyedGraph`].
pub type KeyedUnGraph<K, N, E> = KeyedGraph<K, N, E, petgraph::Undirected>;

/// Directed [`KeyedGraph`].
pub type KeyedDiGraph<K, N, E> = KeyedGraph<K, N, E, petgraph::Directed>;

impl<K, N, E, Ty: EdgeType> KeyedGraph<K, N, E, Ty> {
    /// Creates an empty keyed graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
        }
    }

    /// Borrows the underlying petgraph graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<(K, N), E, Ty> {
        &self.graph
    }

    /// Consumes the wrapper, returning the underlying petgraph graph.
    #[must_use]
    pub fn into_inner(self) -> Graph<(K, N), E, Ty> {
        self.graph
    }
}

impl<K, N, E, Ty: EdgeType> Default for KeyedGraph<K, N, E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, E, Ty> GraphSink<K, N, E> for KeyedGraph<K, N, E, Ty>
where
    K: PartialEq,
    Ty: EdgeType,
{
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn is_multigraph(&self) -> bool {
        true
    }

    fn add_node(&mut self, key: K, data: N) {
        self.graph.add_node((key, data));
    }

    fn add_edge(&mut self, from: K, to: K, data: E) {
        let resolve = |graph: &Graph<(K, N), E, Ty>, key: &K| {
            graph
                .node_indices()
                .find(|&index| graph.node_weight(index).is_some_and(|(k, _)| k == key))
        };
        if let (Some(from), Some(to)) = (resolve(&self.graph, &from), resolve(&self.graph, &to)) {
            self.graph.add_edge(from, to, data);
        }
    }
}

/// Simple-graph sink over [`GraphMap`].
///
/// Node keys become the map's node identifiers, so no node data beyond the
/// key itself is stored; configure the generator without a node-data
/// distribution (the unit default). `GraphMap` rejects self-loops, so keep
/// the generator's self-loop policy at its default of disallowed.
///
/// # Examples
/// ```
/// use petgraph::graphmap::UnGraphMap;
/// use ramify_core::GraphSink;
///
/// let mut graph: UnGraphMap<u16, u8> = UnGraphMap::new();
/// GraphSink::add_node(&mut graph, 1, ());
/// GraphSink::add_node(&mut graph, 2, ());
/// GraphSink::add_edge(&mut graph, 1, 2, 9);
/// assert_eq!(graph.edge_count(), 1);
/// ```
impl<K, E, Ty> GraphSink<K, (), E> for GraphMap<K, E, Ty>
where
    K: NodeTrait,
    Ty: EdgeType,
{
    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn is_multigraph(&self) -> bool {
        false
    }

    fn add_node(&mut self, key: K, _data: ()) {
        GraphMap::add_node(self, key);
    }

    fn add_edge(&mut self, from: K, to: K, data: E) {
        // Replaces any previous edge between the pair, keeping the graph
        // simple.
        GraphMap::add_edge(self, from, to, data);
    }
}
