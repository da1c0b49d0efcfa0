#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use scan_paths::graphs::Graph;

/// Graph from the usage example: the direct edge 0 -> 1 is beaten by the
/// detour over 2.
pub fn detour_graph() -> Graph {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, 4.0).unwrap();
    graph.add_edge(0, 2, 1.0).unwrap();
    graph.add_edge(2, 1, 1.0).unwrap();
    graph
}

/// Random graph with small integral weights, so sums are exact.
pub fn random_graph(seed: u64, number_of_vertices: u32, number_of_edges: u32) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(number_of_vertices);
    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..10) as f64;
        graph.add_edge(tail, head, weight).unwrap();
    }
    graph
}
