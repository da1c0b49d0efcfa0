mod common;

use rand::{rngs::StdRng, SeedableRng};
use scan_paths::{
    search::{
        brute_force::brute_force_distance, dijkstra::Dijkstra, path::reconstruct_path,
        selection::SelectionStrategy, PathFinding,
    },
    utility::gen_requests,
};

use common::random_graph;

#[test]
fn source_distance_is_zero() {
    for seed in 0..20 {
        let graph = random_graph(seed, 25, 60);
        let dijkstra = Dijkstra::new(&graph);
        for source in graph.vertices() {
            let state = dijkstra.single_source(source).unwrap();
            assert_eq!(state.distance(source), Some(0.0));
        }
    }
}

#[test]
fn path_weight_matches_distance() {
    for seed in 0..20 {
        let graph = random_graph(seed, 30, 90);
        let dijkstra = Dijkstra::new(&graph);
        for source in graph.vertices() {
            let state = dijkstra.single_source(source).unwrap();
            for target in state.reachable_vertices() {
                let path = reconstruct_path(&state, target)
                    .unwrap()
                    .into_path()
                    .unwrap();

                assert_eq!(path.vertices.first(), Some(&source));
                assert_eq!(path.vertices.last(), Some(&target));
                assert_eq!(graph.get_path_weight(&path.vertices), Some(path.distance));
            }
        }
    }
}

#[test]
fn agrees_with_brute_force() {
    for seed in 0..10 {
        let graph = random_graph(seed, 8, 20);
        let dijkstra = Dijkstra::new(&graph);
        for source in graph.vertices() {
            for target in graph.vertices() {
                let expected = brute_force_distance(&graph, source, target).unwrap();
                let distance = dijkstra
                    .shortest_path_between(source, target)
                    .unwrap()
                    .distance();
                assert_eq!(distance, expected, "seed {} {} -> {}", seed, source, target);
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let graph = random_graph(3, 40, 160);
    let dijkstra = Dijkstra::new(&graph);
    for source in graph.vertices() {
        let first = dijkstra.single_source(source).unwrap();
        let second = dijkstra.single_source(source).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn strategies_produce_identical_state() {
    let mut rng = StdRng::seed_from_u64(11);
    for seed in 0..10 {
        // many zero weights and parallel edges provoke ties
        let graph = random_graph(seed, 50, 300);
        let linear = Dijkstra::new(&graph);
        let heap = Dijkstra::new(&graph).with_strategy(SelectionStrategy::BinaryHeap);

        for request in gen_requests(&graph, 20, &mut rng) {
            assert_eq!(
                linear.single_source(request.source).unwrap(),
                heap.single_source(request.source).unwrap()
            );
            assert_eq!(
                linear.shortest_path(&request).unwrap(),
                heap.shortest_path(&request).unwrap()
            );
        }
    }
}
