//! the coloring propagation process: one domination pass, then iterated zero forcing

use crate::graph::AdjacencyMatrix;
use crate::search::color_sets::ColorSet;

/// Computes the number of forcing rounds needed to color every vertex of
/// `graph` starting from `initial`, or `graph.n` if the process stalls with
/// uncolored vertices left.
///
/// The initially colored vertices first color their entire neighborhoods in a
/// single uncounted domination pass. After that, each round lets every
/// colored vertex with exactly one uncolored neighbor force that neighbor; a
/// vertex adjacent to several uncolored vertices forces nothing. All of a
/// round's forces are computed against the coloring as it stood when the
/// round began and applied together afterwards, so a force never enables
/// another force within the same round.
pub fn propagation_time(graph: &AdjacencyMatrix, initial: &ColorSet) -> usize {
    let n = graph.n;
    assert!(
        initial.len() == n,
        "configuration covers {} vertices, graph has {}",
        initial.len(),
        n
    );

    if initial.cardinality() == n {
        return 0;
    }

    // domination pass: selected vertices color their closed neighborhoods
    let mut colored: Vec<bool> = initial.members().to_vec();
    for i in 0..n {
        if initial.contains(i) {
            for (j, &entry) in graph.row(i).iter().enumerate() {
                if entry != 0 {
                    colored[j] = true;
                }
            }
        }
    }

    let mut rounds = 0;
    let mut pending = vec![false; n];
    loop {
        pending.fill(false);
        let mut forced = false;

        for i in 0..n {
            if !colored[i] {
                continue;
            }
            let mut target = None;
            for (j, &entry) in graph.row(i).iter().enumerate() {
                if entry != 0 && !colored[j] {
                    if target.is_some() {
                        // i is adjacent to multiple uncolored vertices
                        target = None;
                        break;
                    }
                    target = Some(j);
                }
            }
            if let Some(j) = target {
                pending[j] = true;
                forced = true;
            }
        }

        if !forced {
            break;
        }
        for (j, &force) in pending.iter().enumerate() {
            if force {
                colored[j] = true;
            }
        }
        rounds += 1;
    }

    if colored.iter().all(|&c| c) {
        rounds
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::generators::{complete_graph, path_graph, star_graph};

    fn set_of(order: usize, vertices: &[usize]) -> ColorSet {
        let mut members = vec![false; order];
        for &v in vertices {
            members[v] = true;
        }
        ColorSet::from_members(members)
    }

    #[test]
    fn full_set_returns_zero_for_any_graph() {
        for graph in [path_graph(5), complete_graph(5), star_graph(5)] {
            let full = set_of(5, &[0, 1, 2, 3, 4]);
            assert_eq!(propagation_time(&graph, &full), 0);
        }
    }

    #[test]
    fn domination_alone_counts_no_rounds() {
        // one endpoint of a single edge colors the other during domination
        let edge = path_graph(2);
        assert_eq!(propagation_time(&edge, &set_of(2, &[0])), 0);

        // the middle of a 3-path dominates both neighbors
        let path = path_graph(3);
        assert_eq!(propagation_time(&path, &set_of(3, &[1])), 0);
    }

    #[test]
    fn forces_apply_simultaneously_within_a_round() {
        // From one endpoint of a 4-path, domination colors {0, 1}; vertex 1
        // then forces 2, and only the round after that can 2 force 3. A
        // same-round cascade would finish in one round instead of two.
        let path = path_graph(4);
        assert_eq!(propagation_time(&path, &set_of(4, &[0])), 2);
    }

    #[test]
    fn parallel_forces_share_a_round() {
        // the middle of a 5-path dominates {1, 2, 3}; vertices 1 and 3 then
        // force both endpoints in the same round
        let path = path_graph(5);
        assert_eq!(propagation_time(&path, &set_of(5, &[2])), 1);
    }

    #[test]
    fn forcing_marches_down_a_path() {
        let path = path_graph(5);
        assert_eq!(propagation_time(&path, &set_of(5, &[0])), 3);
    }

    #[test]
    fn empty_set_is_disqualified() {
        let path = path_graph(4);
        assert_eq!(propagation_time(&path, &set_of(4, &[])), 4);
    }

    #[test]
    fn stalled_propagation_returns_order() {
        // a single leaf colors itself and the center, which is then blocked
        // by two uncolored leaves
        let star = star_graph(4);
        assert_eq!(propagation_time(&star, &set_of(4, &[1])), 4);
    }

    #[test]
    fn rounds_stay_within_order() {
        for order in 1..=6 {
            let graph = path_graph(order);
            for bits in 0..(1usize << order) {
                let set = ColorSet::from_bits(bits, order);
                assert!(propagation_time(&graph, &set) <= order);
            }
        }
    }

    #[test]
    #[should_panic]
    fn rejects_mismatched_configuration() {
        propagation_time(&path_graph(4), &set_of(3, &[0]));
    }
}
