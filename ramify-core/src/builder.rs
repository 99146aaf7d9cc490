//! Builder for graph generation configurations.
//!
//! Exposes the named-parameter configuration surface and the eager
//! validation performed before any random draw is consumed.

use std::{fmt, sync::Arc};

use proptest::strategy::{BoxedStrategy, Strategy};
use tracing::{debug, instrument};

use crate::{
    error::{GeneratorError, Result},
    generator::GraphGenerator,
};

/// Node-count ceiling applied when the caller leaves `max_nodes` open.
///
/// The draw engine works with finite size ranges, so generation with an
/// unbounded node limit draws up to `min_nodes.max(DEFAULT_MAX_NODES)` keys;
/// validation still treats the limit as absent. This is also the default
/// `max_nodes` for freshly created builders.
pub const DEFAULT_MAX_NODES: usize = 25;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// Every generation parameter is set by name through a `with_*` method and
/// validated together by [`build`](Self::build). A fresh builder starts from
/// the conventional defaults: any node count up to [`DEFAULT_MAX_NODES`], no
/// edge-count demands, self-loops disallowed, connectivity required, and no
/// node or edge data.
///
/// # Examples
/// ```
/// use ramify_core::GraphStrategyBuilder;
///
/// let generator = GraphStrategyBuilder::<(), u32, (), ()>::new(|| (), 0u32..100)
///     .with_node_bounds(2, Some(6))
///     .with_edge_bounds(1, Some(12))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.min_nodes(), 2);
/// assert_eq!(generator.max_nodes(), Some(6));
/// ```
pub struct GraphStrategyBuilder<G, K, N, E> {
    constructor: Arc<dyn Fn() -> G>,
    node_keys: BoxedStrategy<K>,
    node_data: Option<BoxedStrategy<N>>,
    edge_data: Option<BoxedStrategy<E>>,
    min_nodes: usize,
    max_nodes: Option<usize>,
    min_edges: usize,
    max_edges: Option<usize>,
    self_loops: bool,
    connected: bool,
}

impl<G, K, N, E> GraphStrategyBuilder<G, K, N, E>
where
    K: fmt::Debug,
{
    /// Creates a builder around the graph constructor and the node-key
    /// distribution, populated with default parameters.
    ///
    /// The constructor must return an empty mutable graph; it is invoked
    /// once per generated example (plus one draw-free probe of the shape
    /// flags per strategy). Keys drawn from `node_keys` are guaranteed
    /// distinct within a generated graph by the engine's set primitive.
    ///
    /// # Examples
    /// ```
    /// use ramify_core::GraphStrategyBuilder;
    ///
    /// let builder = GraphStrategyBuilder::<(), i64, (), ()>::new(|| (), -50i64..50);
    /// assert_eq!(builder.min_nodes(), 0);
    /// assert!(builder.connected());
    /// ```
    #[must_use]
    pub fn new(
        constructor: impl Fn() -> G + 'static,
        node_keys: impl Strategy<Value = K> + 'static,
    ) -> Self {
        Self {
            constructor: Arc::new(constructor),
            node_keys: node_keys.boxed(),
            node_data: None,
            edge_data: None,
            min_nodes: 0,
            max_nodes: Some(DEFAULT_MAX_NODES),
            min_edges: 0,
            max_edges: None,
            self_loops: false,
            connected: true,
        }
    }

    /// Sets the distribution for per-node data records.
    ///
    /// Without one, every node carries `N::default()` and no draw is spent
    /// on node data.
    #[must_use]
    pub fn with_node_data(mut self, records: impl Strategy<Value = N> + 'static) -> Self
    where
        N: fmt::Debug,
    {
        self.node_data = Some(records.boxed());
        self
    }

    /// Sets the distribution for per-edge data records.
    ///
    /// Without one, every edge carries `E::default()` and no draw is spent
    /// on edge data.
    #[must_use]
    pub fn with_edge_data(mut self, records: impl Strategy<Value = E> + 'static) -> Self
    where
        E: fmt::Debug,
    {
        self.edge_data = Some(records.boxed());
        self
    }

    /// Bounds the node count; `None` leaves the upper bound open.
    ///
    /// # Examples
    /// ```
    /// use ramify_core::GraphStrategyBuilder;
    ///
    /// let builder =
    ///     GraphStrategyBuilder::<(), u8, (), ()>::new(|| (), 0u8..200).with_node_bounds(3, None);
    /// assert_eq!(builder.min_nodes(), 3);
    /// assert_eq!(builder.max_nodes(), None);
    /// ```
    #[must_use]
    pub fn with_node_bounds(mut self, min_nodes: usize, max_nodes: Option<usize>) -> Self {
        self.min_nodes = min_nodes;
        self.max_nodes = max_nodes;
        self
    }

    /// Bounds the edge count; `None` leaves the upper bound open.
    ///
    /// The lower bound is best-effort: when the candidate universe holds
    /// fewer pairs than `min_edges`, generation quietly stops at the
    /// universe size instead of failing.
    #[must_use]
    pub fn with_edge_bounds(mut self, min_edges: usize, max_edges: Option<usize>) -> Self {
        self.min_edges = min_edges;
        self.max_edges = max_edges;
        self
    }

    /// Allows or forbids edges whose endpoints coincide.
    #[must_use]
    pub fn with_self_loops(mut self, allowed: bool) -> Self {
        self.self_loops = allowed;
        self
    }

    /// Requires or waives single-component connectivity.
    ///
    /// Connectivity is guaranteed through a spanning structure that is
    /// always emitted, so a connected graph may carry more edges than a
    /// tight `max_edges` would otherwise allow; configurations where that
    /// conflict is certain are rejected by [`build`](Self::build).
    #[must_use]
    pub fn with_connected(mut self, required: bool) -> Self {
        self.connected = required;
        self
    }

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

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// Validation happens here, before the draw engine sees the strategy,
    /// so an unsatisfiable configuration never costs a shrink cycle.
    ///
    /// # Errors
    /// - [`GeneratorError::NodeBoundsInverted`] when `min_nodes` exceeds
    ///   `max_nodes`.
    /// - [`GeneratorError::EdgeBoundsInverted`] when `min_edges` exceeds
    ///   `max_edges`.
    /// - [`GeneratorError::ConnectivityUnsatisfiable`] when connectivity is
    ///   required but `max_edges` cannot fit the spanning structure.
    /// - [`GeneratorError::EdgesNeedTwoNodes`] when edges are demanded from
    ///   a connected, loop-free graph capped below two nodes.
    ///
    /// # Examples
    /// ```
    /// use ramify_core::{GeneratorError, GraphStrategyBuilder};
    ///
    /// let error = GraphStrategyBuilder::<(), u32, (), ()>::new(|| (), 0u32..10)
    ///     .with_node_bounds(3, Some(25))
    ///     .with_edge_bounds(0, Some(0))
    ///     .build()
    ///     .expect_err("a connected graph cannot fit in zero edges");
    /// assert!(matches!(error, GeneratorError::ConnectivityUnsatisfiable { .. }));
    /// ```
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            min_nodes = self.min_nodes,
            max_nodes = ?self.max_nodes,
            min_edges = self.min_edges,
            max_edges = ?self.max_edges,
            self_loops = self.self_loops,
            connected = self.connected
        )
    )]
    pub fn build(self) -> Result<GraphGenerator<G, K, N, E>> {
        if let Some(max_nodes) = self.max_nodes
            && self.min_nodes > max_nodes
        {
            return Err(GeneratorError::NodeBoundsInverted {
                min_nodes: self.min_nodes,
                max_nodes,
            });
        }
        if let Some(max_edges) = self.max_edges {
            if self.min_edges > max_edges {
                return Err(GeneratorError::EdgeBoundsInverted {
                    min_edges: self.min_edges,
                    max_edges,
                });
            }
            if self.connected {
                // The spanning structure is emitted regardless of max_edges,
                // so the bound must leave room for it.
                let node_bound = self.max_nodes.unwrap_or(self.min_nodes);
                if max_edges < node_bound.saturating_sub(1) {
                    return Err(GeneratorError::ConnectivityUnsatisfiable {
                        node_bound,
                        max_edges,
                    });
                }
            }
        }
        if self.connected
            && !self.self_loops
            && self.min_edges > 0
            && let Some(max_nodes) = self.max_nodes
            && max_nodes <= 1
        {
            return Err(GeneratorError::EdgesNeedTwoNodes {
                max_nodes,
                min_edges: self.min_edges,
            });
        }
        debug!("graph generation configuration validated");
        Ok(GraphGenerator {
            constructor: self.constructor,
            node_keys: self.node_keys,
            node_data: self.node_data,
            edge_data: self.edge_data,
            min_nodes: self.min_nodes,
            max_nodes: self.max_nodes,
            min_edges: self.min_edges,
            max_edges: self.max_edges,
            self_loops: self.self_loops,
            connected: self.connected,
        })
    }
}

impl<G, K, N, E> fmt::Debug for GraphStrategyBuilder<G, K, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategyBuilder")
            .field("min_nodes", &self.min_nodes)
            .field("max_nodes", &self.max_nodes)
            .field("min_edges", &self.min_edges)
            .field("max_edges", &self.max_edges)
            .field("self_loops", &self.self_loops)
            .field("connected", &self.connected)
            .field("node_data", &self.node_data.is_some())
            .field("edge_data", &self.edge_data.is_some())
            .finish_non_exhaustive()
    }
}
