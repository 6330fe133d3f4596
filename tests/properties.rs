use std::collections::HashSet;

use dense_route::algorithm::{SearchEvent, ShortestPathAlgorithm, ShortestPathResult};
use dense_route::graph::generators::generate_random_dense;
use dense_route::graph::{AdjacencyGraph, DenseGraph, Graph, MutableGraph};
use dense_route::Dijkstra;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

// Random graphs of assorted sizes and densities, reproducible by seed
fn sample_graphs() -> Vec<DenseGraph<i64>> {
    let mut graphs = Vec::new();
    for seed in 0..12u64 {
        let n = 1 + (seed as usize * 7) % 40;
        let density = [0.02, 0.1, 0.35, 0.9][seed as usize % 4];
        graphs.push(generate_random_dense(n, density, 20, seed).unwrap());
    }
    graphs
}

fn chain_cost(graph: &DenseGraph<i64>, result: &ShortestPathResult<i64>, target: usize) -> i64 {
    let mut cost = 0;
    let mut current = target;
    let mut steps = 0;
    while current != result.source {
        let pred = result.predecessors[current].expect("reachable vertex has a predecessor");
        cost += graph.get_edge(pred, current).unwrap().expect("chain uses real edges");
        current = pred;
        steps += 1;
        assert!(steps <= graph.vertex_count(), "predecessor chain is too long");
    }
    cost
}

#[test]
fn source_has_zero_cost_and_no_predecessor() {
    for graph in sample_graphs() {
        for source in 0..graph.vertex_count() {
            let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
            assert_eq!(result.distances[source], Some(0));
            assert_eq!(result.predecessors[source], None);
        }
    }
}

#[test]
fn predecessor_chains_sum_to_distances() {
    for graph in sample_graphs() {
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        for v in 0..graph.vertex_count() {
            match result.distances[v] {
                Some(dist) => {
                    assert_eq!(chain_cost(&graph, &result, v), dist);
                    let path = result.path_to(v).unwrap().unwrap();
                    assert_eq!(path.first(), Some(&0));
                    assert_eq!(path.last(), Some(&v));
                    assert!(path.len() <= graph.vertex_count());
                }
                None => {
                    assert_eq!(result.predecessors[v], None);
                    assert_eq!(result.path_to(v).unwrap(), None);
                }
            }
        }
    }
}

#[test]
fn no_edge_can_improve_a_final_distance() {
    for graph in sample_graphs() {
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        for u in 0..graph.vertex_count() {
            let Some(dist_u) = result.distances[u] else {
                continue;
            };
            for (v, cost) in graph.outgoing_edges(u) {
                let dist_v = result.distances[v].expect("neighbour of a reachable vertex is reachable");
                assert!(dist_v <= dist_u + cost, "edge {} -> {} violates optimality", u, v);
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    for graph in sample_graphs() {
        let dijkstra = Dijkstra::new();
        let first = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        let second = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn distances_only_decrease_and_settled_vertices_stay_final() {
    for graph in sample_graphs() {
        let mut settled = HashSet::new();
        let mut events = 0;

        let result = Dijkstra::new()
            .compute_observed(&graph, 0, |event| {
                events += 1;
                match event {
                    SearchEvent::Settled { vertex, .. } => {
                        assert!(settled.insert(vertex), "vertex {} settled twice", vertex);
                    }
                    SearchEvent::Relaxed {
                        vertex,
                        previous,
                        distance,
                        ..
                    } => {
                        assert!(!settled.contains(&vertex), "final vertex {} relaxed", vertex);
                        if let Some(previous) = previous {
                            assert!(distance < previous);
                        }
                    }
                }
            })
            .unwrap();

        assert!(events >= 1);
        assert_eq!(settled.len(), result.reachable_count());
    }
}

#[test]
fn dense_and_adjacency_stores_agree() {
    for graph in sample_graphs() {
        let sparse = AdjacencyGraph::from(&graph);
        let dijkstra = Dijkstra::new();
        for source in 0..graph.vertex_count().min(5) {
            let dense_result = dijkstra.compute_shortest_paths(&graph, source).unwrap();
            let sparse_result = dijkstra.compute_shortest_paths(&sparse, source).unwrap();
            assert_eq!(dense_result, sparse_result);
        }
    }
}

#[test]
fn independent_computations_share_one_graph() {
    let graph = generate_random_dense(30, 0.2, 9, 99).unwrap();
    let dijkstra = Dijkstra::new();

    let (from_zero, from_five) = std::thread::scope(|scope| {
        let a = scope.spawn(|| dijkstra.compute_shortest_paths(&graph, 0).unwrap());
        let b = scope.spawn(|| dijkstra.compute_shortest_paths(&graph, 5).unwrap());
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(from_zero, dijkstra.compute_shortest_paths(&graph, 0).unwrap());
    assert_eq!(from_five, dijkstra.compute_shortest_paths(&graph, 5).unwrap());
}

#[test]
fn float_costs_follow_the_same_rules() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 12;
    let mut graph: DenseGraph<OrderedFloat<f64>> = DenseGraph::new(n).unwrap();
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(0.3) {
                graph.set_edge(u, v, OrderedFloat(rng.gen_range(0.5..10.0))).unwrap();
            }
        }
    }

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances[0], Some(OrderedFloat(0.0)));
    for u in 0..n {
        let Some(dist_u) = result.distances[u] else {
            continue;
        };
        for (v, cost) in graph.outgoing_edges(u) {
            let dist_v = result.distances[v].unwrap();
            assert!(dist_v.into_inner() <= dist_u.into_inner() + cost.into_inner() + 1e-9);
        }
    }
}
