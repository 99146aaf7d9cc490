//! Error types for the ramify core library.
//!
//! Defines the configuration error surfaced by the builder and a convenient
//! result alias.

use std::fmt;

use thiserror::Error;

/// An error produced while validating a generator configuration.
///
/// Every variant is detected by
/// [`GraphStrategyBuilder::build`](crate::GraphStrategyBuilder::build) before
/// the draw engine consumes a single draw, so an unsatisfiable configuration
/// never costs the engine a shrink cycle.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// `min_nodes` exceeded the configured `max_nodes`.
    #[error("min_nodes {min_nodes} exceeds max_nodes {max_nodes}")]
    NodeBoundsInverted {
        /// Lower node-count bound supplied by the caller.
        min_nodes: usize,
        /// Upper node-count bound supplied by the caller.
        max_nodes: usize,
    },
    /// `min_edges` exceeded the configured `max_edges`.
    #[error("min_edges {min_edges} exceeds max_edges {max_edges}")]
    EdgeBoundsInverted {
        /// Lower edge-count bound supplied by the caller.
        min_edges: usize,
        /// Upper edge-count bound supplied by the caller.
        max_edges: usize,
    },
    /// A connected graph cannot fit inside the configured `max_edges`.
    #[error(
        "a connected graph on up to {node_bound} nodes needs at least {} edges but max_edges is {max_edges}",
        node_bound.saturating_sub(1)
    )]
    ConnectivityUnsatisfiable {
        /// Node count the spanning structure must cover: `max_nodes` when
        /// bounded, otherwise `min_nodes`.
        node_bound: usize,
        /// Upper edge-count bound supplied by the caller.
        max_edges: usize,
    },
    /// Edges were demanded from a graph too small to contain any.
    #[error(
        "min_edges is {min_edges} but at most {max_nodes} node(s) with self-loops disallowed admit no edges"
    )]
    EdgesNeedTwoNodes {
        /// Upper node-count bound supplied by the caller.
        max_nodes: usize,
        /// Lower edge-count bound supplied by the caller.
        min_edges: usize,
    },
}

/// Stable machine-readable codes describing [`GeneratorError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GeneratorErrorCode {
    /// `min_nodes` exceeded `max_nodes`.
    NodeBoundsInverted,
    /// `min_edges` exceeded `max_edges`.
    EdgeBoundsInverted,
    /// Connectivity demands more edges than `max_edges` allows.
    ConnectivityUnsatisfiable,
    /// Edges demanded from a graph too small to contain any.
    EdgesNeedTwoNodes,
}

impl GeneratorErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NodeBoundsInverted => "RAMIFY_NODE_BOUNDS_INVERTED",
            Self::EdgeBoundsInverted => "RAMIFY_EDGE_BOUNDS_INVERTED",
            Self::ConnectivityUnsatisfiable => "RAMIFY_CONNECTIVITY_UNSATISFIABLE",
            Self::EdgesNeedTwoNodes => "RAMIFY_EDGES_NEED_TWO_NODES",
        }
    }
}

impl fmt::Display for GeneratorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeneratorError {
    /// Retrieve the stable [`GeneratorErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GeneratorErrorCode {
        match self {
            Self::NodeBoundsInverted { .. } => GeneratorErrorCode::NodeBoundsInverted,
            Self::EdgeBoundsInverted { .. } => GeneratorErrorCode::EdgeBoundsInverted,
            Self::ConnectivityUnsatisfiable { .. } => GeneratorErrorCode::ConnectivityUnsatisfiable,
            Self::EdgesNeedTwoNodes { .. } => GeneratorErrorCode::EdgesNeedTwoNodes,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
