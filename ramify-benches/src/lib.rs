//! Benchmark support for ramify graph generation.

use std::fmt;

use proptest::strategy::{BoxedStrategy, Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

/// Deterministic runner for sampling strategies outside a test harness.
#[must_use]
pub fn seeded_runner(seed: u8) -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &[seed; 32]);
    TestRunner::new_with_rng(Config::default(), rng)
}

/// Draws one value from `strategy`.
///
/// # Panics
/// Panics when the strategy rejects, which benchmark configurations are
/// chosen never to do.
pub fn sample<T: fmt::Debug>(strategy: &BoxedStrategy<T>, runner: &mut TestRunner) -> T {
    strategy
        .new_tree(runner)
        .expect("strategy must produce a value")
        .current()
}
