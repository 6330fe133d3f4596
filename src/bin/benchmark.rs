use std::time::{Duration, Instant};

use dense_route::algorithm::ShortestPathAlgorithm;
use dense_route::graph::generators::generate_random_dense;
use dense_route::graph::{AdjacencyGraph, Graph};
use dense_route::Dijkstra;

// Function to benchmark Dijkstra on one graph representation
fn benchmark_store<G>(name: &str, graph: &G, source: usize) -> dense_route::Result<Duration>
where
    G: Graph<i64>,
{
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - {}: {} reachable vertices in {:?}",
        name,
        result.reachable_count(),
        duration
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [64, 256, 1_024, 2_048];
    let densities = [0.05, 0.5];

    println!("=====================================================");
    println!("Benchmark: dense matrix vs adjacency lists");
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        for &density in &densities {
            println!("\nGenerating random graph with {} vertices, density {}...", size, density);
            let dense = generate_random_dense(size, density, 100, size as u64)?;
            let sparse = AdjacencyGraph::from(&dense);
            println!("Graph has {} edges", dense.edge_count());

            let dense_time = benchmark_store("DenseGraph", &dense, 0)?;
            let sparse_time = benchmark_store("AdjacencyGraph", &sparse, 0)?;
            results.push((size, density, dense_time, sparse_time));
        }
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<8} | {:<12} | {:<12} | {:<8}",
        "Vertices", "Density", "Dense (ms)", "Adjacency (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for (size, density, dense_time, sparse_time) in &results {
        let ratio = dense_time.as_secs_f64() / sparse_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<8.2} | {:<12.3} | {:<12.3} | {:<8.2}",
            size,
            density,
            dense_time.as_secs_f64() * 1000.0,
            sparse_time.as_secs_f64() * 1000.0,
            ratio
        );
    }

    Ok(())
}
