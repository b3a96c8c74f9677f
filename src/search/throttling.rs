//! exhaustive minimization of cardinality + propagation time

use std::cmp::min;

use rayon::prelude::*;

use crate::graph::AdjacencyMatrix;
use crate::search::color_sets::{enumerate_color_sets, ColorSet, MAX_ORDER};
use crate::search::propagation::propagation_time;

/// Minimum of cardinality + propagation time over a caller-provided
/// configuration table.
///
/// The table must cover all 2^n configurations for the graph's order; callers
/// batching many graphs of one order reuse a single table across all of them.
/// The running minimum is seeded at n, the value the full vertex set always
/// achieves, so a disqualified configuration can never win.
pub fn power_throttling_number_with_sets(graph: &AdjacencyMatrix, sets: &[ColorSet]) -> usize {
    let n = graph.n;
    assert!(n >= 1 && n <= MAX_ORDER, "order {} is out of range", n);
    assert!(
        sets.len() == 1 << n,
        "expected {} configurations for order {}, got {}",
        1usize << n,
        n,
        sets.len()
    );

    sets.par_iter()
        .map(|set| set.cardinality() + propagation_time(graph, set))
        .reduce(|| n, min)
}

/// the power throttling number of `graph`
pub fn power_throttling_number(graph: &AdjacencyMatrix) -> usize {
    let sets = enumerate_color_sets(graph.n);
    power_throttling_number_with_sets(graph, &sets)
}
