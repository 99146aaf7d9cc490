//! Randomized graph generation strategies for property-based testing.
//!
//! Ramify builds [`proptest`] strategies that produce graphs satisfying
//! structural constraints: node- and edge-count bounds, a self-loop policy,
//! and optional single-component connectivity. The graph representation is
//! supplied by the caller through the [`GraphSink`] trait, and every random
//! decision flows through the draw engine, so failing examples shrink
//! toward simpler graphs like any other proptest value.
//!
//! # Examples
//! ```
//! use proptest::prelude::*;
//! use proptest::strategy::ValueTree;
//! use proptest::test_runner::TestRunner;
//! use ramify_core::{GraphSink, GraphStrategyBuilder};
//!
//! #[derive(Debug, Default)]
//! struct EdgeList {
//!     nodes: Vec<(u32, ())>,
//!     edges: Vec<(u32, u32, ())>,
//! }
//!
//! impl GraphSink<u32, (), ()> for EdgeList {
//!     fn is_directed(&self) -> bool {
//!         false
//!     }
//!     fn is_multigraph(&self) -> bool {
//!         false
//!     }
//!     fn add_node(&mut self, key: u32, data: ()) {
//!         self.nodes.push((key, data));
//!     }
//!     fn add_edge(&mut self, from: u32, to: u32, data: ()) {
//!         self.edges.push((from, to, data));
//!     }
//! }
//!
//! let generator = GraphStrategyBuilder::<EdgeList, u32, (), ()>::new(
//!     EdgeList::default,
//!     0u32..1_000,
//! )
//! .with_node_bounds(2, Some(8))
//! .with_edge_bounds(1, Some(16))
//! .build()
//! .expect("builder configuration is valid");
//!
//! let mut runner = TestRunner::deterministic();
//! let strategy = generator.strategy();
//! let graph = strategy
//!     .new_tree(&mut runner)
//!     .expect("generation must succeed")
//!     .current();
//! assert!(graph.nodes.len() >= 2);
//! assert!(!graph.edges.is_empty());
//! ```

mod builder;
mod error;
mod generator;
mod sink;
mod topology;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_MAX_NODES, GraphStrategyBuilder},
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::GraphGenerator,
    sink::GraphSink,
    topology::MULTI_EDGE_HEADROOM,
};
