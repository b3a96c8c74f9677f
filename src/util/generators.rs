//! constructors for named test graphs and random instances

use rand::Rng;

use crate::graph::AdjacencyMatrix;

/// the path 0 - 1 - ... - (n-1)
pub fn path_graph(n: usize) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::empty(n);
    for i in 1..n {
        graph.add_edge(i - 1, i);
    }
    graph
}

/// the cycle on `n` vertices
pub fn cycle_graph(n: usize) -> AdjacencyMatrix {
    assert!(n >= 3, "a cycle needs at least 3 vertices");
    let mut graph = path_graph(n);
    graph.add_edge(n - 1, 0);
    graph
}

/// the complete graph on `n` vertices
pub fn complete_graph(n: usize) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(i, j);
        }
    }
    graph
}

/// the star with center 0 and `n - 1` leaves
pub fn star_graph(n: usize) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::empty(n);
    for leaf in 1..n {
        graph.add_edge(0, leaf);
    }
    graph
}

/// the edgeless graph on `n` vertices
pub fn empty_graph(n: usize) -> AdjacencyMatrix {
    AdjacencyMatrix::empty(n)
}

/// a graph where each edge appears independently with probability `p`
pub fn random_graph(n: usize, p: f64, rng: &mut impl Rng) -> AdjacencyMatrix {
    let mut graph = AdjacencyMatrix::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                graph.add_edge(i, j);
            }
        }
    }
    graph
}
