//! Edge-set planning for generated graphs.
//!
//! Produces the index-pair edge list for a graph of `n` nodes: the optional
//! spanning chain that guarantees connectivity, followed by a random top-up
//! drawn from the remaining candidate universe. Pairs index into the ordered
//! key sequence drawn by the generator; every sequence here is built in a
//! fixed order so the draw engine can replay and shrink it.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

/// Parallel edges drawn above `min_edges` when a multigraph is generated
/// without an upper edge bound. The draw engine works with finite size
/// ranges, so "unbounded" has to stop somewhere; the bound itself is still
/// treated as absent during validation.
pub const MULTI_EDGE_HEADROOM: usize = 25;

/// Structural parameters fixed before edge planning starts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgePlan {
    pub(crate) nodes: usize,
    pub(crate) directed: bool,
    pub(crate) multigraph: bool,
    pub(crate) self_loops: bool,
    pub(crate) connected: bool,
    pub(crate) min_edges: usize,
    pub(crate) max_edges: Option<usize>,
}

/// Returns the complete edge list for one generated graph: spanning chain
/// first, then the random top-up.
pub(crate) fn edge_set(plan: EdgePlan) -> BoxedStrategy<Vec<(usize, usize)>> {
    spanning_chain(plan)
        .prop_flat_map(move |spanning| {
            let top_up = top_up_edges(plan, &spanning);
            (Just(spanning), top_up)
        })
        .prop_map(|(mut edges, extra)| {
            edges.extend(extra);
            edges
        })
        .boxed()
}

/// Spanning chain guaranteeing connectivity: node `idx` links to a uniformly
/// drawn earlier node, keeping the invariant that all nodes below `idx + 1`
/// sit in one component. The drawn offset is mirrored so shrinking moves the
/// parent toward `idx - 1`, i.e. toward the path graph rather than the star.
///
/// These edges are always emitted, even when a tight `max_edges` would be
/// exceeded; the builder rejects configurations where that tension is
/// certain.
fn spanning_chain(plan: EdgePlan) -> BoxedStrategy<Vec<(usize, usize)>> {
    if !plan.connected || plan.nodes < 2 {
        return Just(Vec::new()).boxed();
    }
    let links: Vec<_> = (1..plan.nodes)
        .map(|idx| (0..idx).prop_map(move |offset| (idx - 1 - offset, idx)))
        .collect();
    links.boxed()
}

/// Random edges beyond the spanning chain, within the remaining
/// [`min_edges`, `max_edges`] budget.
///
/// Simple graphs sample a distinct subsequence of the candidate universe;
/// multigraphs draw repeatable picks. When the universe holds fewer pairs
/// than the remaining minimum demands, the draw quietly stops at the
/// universe size.
fn top_up_edges(plan: EdgePlan, spanning: &[(usize, usize)]) -> BoxedStrategy<Vec<(usize, usize)>> {
    let candidates = candidate_universe(plan, spanning);
    let drawn = spanning.len();
    let mut max_extra = match plan.max_edges {
        Some(limit) => limit.saturating_sub(drawn),
        None if plan.multigraph => plan.min_edges.saturating_sub(drawn) + MULTI_EDGE_HEADROOM,
        None => candidates.len(),
    };
    if !plan.multigraph {
        max_extra = max_extra.min(candidates.len());
    }
    let min_extra = plan.min_edges.saturating_sub(drawn).min(max_extra);
    if candidates.is_empty() || max_extra == 0 {
        return Just(Vec::new()).boxed();
    }
    if plan.multigraph {
        proptest::collection::vec(proptest::sample::select(candidates), min_extra..=max_extra)
            .boxed()
    } else {
        proptest::sample::subsequence(candidates, min_extra..=max_extra).boxed()
    }
}

/// Enumerates every pair still open for the top-up draw, in a fixed
/// nested-loop order. Undirected pairs are canonicalized to `from <= to`;
/// simple graphs skip pairs already taken by the spanning chain.
fn candidate_universe(plan: EdgePlan, spanning: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let occupied: HashSet<(usize, usize)> = if plan.multigraph {
        HashSet::new()
    } else {
        spanning.iter().copied().collect()
    };
    let mut pairs = Vec::new();
    for from in 0..plan.nodes {
        for to in 0..plan.nodes {
            if from == to && !plan.self_loops {
                continue;
            }
            if !plan.directed && from > to {
                continue;
            }
            if !plan.multigraph && occupied.contains(&(from, to)) {
                continue;
            }
            pairs.push((from, to));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use proptest::strategy::{Strategy, ValueTree};
    use proptest::test_runner::TestRunner;
    use rstest::rstest;

    use super::*;

    fn base(nodes: usize) -> EdgePlan {
        EdgePlan {
            nodes,
            directed: false,
            multigraph: false,
            self_loops: false,
            connected: false,
            min_edges: 0,
            max_edges: None,
        }
    }

    fn sample<T: std::fmt::Debug>(strategy: &BoxedStrategy<T>, runner: &mut TestRunner) -> T {
        strategy
            .new_tree(runner)
            .expect("strategy must produce a value")
            .current()
    }

    #[rstest]
    #[case::undirected(false, false, 3)]
    #[case::undirected_loops(false, true, 6)]
    #[case::directed(true, false, 6)]
    #[case::directed_loops(true, true, 9)]
    fn universe_counts_for_three_nodes(
        #[case] directed: bool,
        #[case] self_loops: bool,
        #[case] expected: usize,
    ) {
        let plan = EdgePlan {
            directed,
            self_loops,
            ..base(3)
        };
        assert_eq!(candidate_universe(plan, &[]).len(), expected);
    }

    #[test]
    fn universe_excludes_spanning_pairs_for_simple_graphs() {
        let simple = base(4);
        let spanning = [(0, 1), (1, 2), (2, 3)];
        let open = candidate_universe(simple, &spanning);
        assert_eq!(open.len(), 3);
        assert!(spanning.iter().all(|pair| !open.contains(pair)));
    }

    #[test]
    fn universe_keeps_spanning_pairs_for_multigraphs() {
        let multi = EdgePlan {
            multigraph: true,
            ..base(4)
        };
        let spanning = [(0, 1), (1, 2), (2, 3)];
        assert_eq!(candidate_universe(multi, &spanning).len(), 6);
    }

    #[test]
    fn spanning_chain_links_every_node_to_an_earlier_one() {
        let connected = EdgePlan {
            connected: true,
            ..base(7)
        };
        let chain = spanning_chain(connected);
        let mut runner = TestRunner::default();
        for _ in 0..32 {
            let edges = sample(&chain, &mut runner);
            assert_eq!(edges.len(), 6);
            for (slot, &(parent, idx)) in edges.iter().enumerate() {
                assert_eq!(idx, slot + 1);
                assert!(parent < idx);
            }
        }
    }

    #[test]
    fn exhausted_universe_stops_short_of_min_edges() {
        let starved = EdgePlan {
            connected: true,
            min_edges: 10,
            ..base(3)
        };
        let edges = edge_set(starved);
        let mut runner = TestRunner::default();
        for _ in 0..32 {
            // Three nodes admit three loop-free undirected pairs; the chain
            // takes two and the top-up can only add the third.
            assert_eq!(sample(&edges, &mut runner).len(), 3);
        }
    }

    #[test]
    fn multigraph_top_up_meets_min_edges_with_parallel_pairs() {
        let multi = EdgePlan {
            multigraph: true,
            min_edges: 5,
            max_edges: Some(5),
            ..base(2)
        };
        let edges = edge_set(multi);
        let mut runner = TestRunner::default();
        for _ in 0..32 {
            let drawn = sample(&edges, &mut runner);
            assert_eq!(drawn.len(), 5);
            assert!(drawn.iter().all(|&pair| pair == (0, 1)));
        }
    }

    #[test]
    fn empty_and_singleton_graphs_have_no_edges() {
        let mut runner = TestRunner::default();
        assert!(sample(&edge_set(base(0)), &mut runner).is_empty());
        assert!(sample(&edge_set(base(1)), &mut runner).is_empty());
    }

    #[test]
    fn singleton_with_self_loops_can_draw_the_loop() {
        let looped = EdgePlan {
            self_loops: true,
            min_edges: 1,
            ..base(1)
        };
        let edges = edge_set(looped);
        let mut runner = TestRunner::default();
        assert_eq!(sample(&edges, &mut runner), vec![(0, 0)]);
    }
}
