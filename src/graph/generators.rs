use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{DenseGraph, MutableGraph};
use crate::Result;

/// Generates a random dense graph with integer costs
///
/// Every ordered pair `(u, v)` with `u != v` receives an edge with
/// probability `density`, costing between 1 and `max_cost` inclusive.
/// The same `seed` always yields the same graph.
pub fn generate_random_dense(
    n: usize,
    density: f64,
    max_cost: i64,
    seed: u64,
) -> Result<DenseGraph<i64>> {
    assert!((0.0..=1.0).contains(&density), "density must be within [0, 1]");
    assert!(max_cost >= 1, "max_cost must be positive");

    let mut graph = DenseGraph::new(n)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for u in 0..n {
        for v in 0..n {
            // Self-loops never shorten a path, leave them out
            if u != v && rng.gen_bool(density) {
                graph.set_edge(u, v, rng.gen_range(1..=max_cost))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a 2D grid graph with 4-connectivity
///
/// Vertex `y * width + x` is linked to its horizontal and vertical
/// neighbours in both directions. Horizontal moves cost `1`, vertical moves
/// cost `2`.
pub fn generate_grid(width: usize, height: usize) -> Result<DenseGraph<i64>> {
    let mut graph = DenseGraph::new(width * height)?;

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.set_edge(current, current + 1, 1)?;
                graph.set_edge(current + 1, current, 1)?;
            }
            if y + 1 < height {
                graph.set_edge(current, current + width, 2)?;
                graph.set_edge(current + width, current, 2)?;
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_dense_is_reproducible() {
        let a = generate_random_dense(20, 0.3, 9, 7).unwrap();
        let b = generate_random_dense(20, 0.3, 9, 7).unwrap();
        assert_eq!(a, b);
        for v in 0..20 {
            assert!(!a.has_edge(v, v));
        }
    }

    #[test]
    fn full_density_is_complete() {
        let graph = generate_random_dense(5, 1.0, 3, 1).unwrap();
        assert_eq!(graph.edge_count(), 20);
    }

    #[test]
    fn grid_has_expected_edges() {
        let graph = generate_grid(3, 2).unwrap();
        // 2 rows * 2 horizontal links + 3 vertical links, both directions
        assert_eq!(graph.edge_count(), 2 * (2 * 2 + 3));
        assert_eq!(graph.get_edge(0, 3).unwrap(), Some(2));
        assert_eq!(graph.get_edge(4, 3).unwrap(), Some(1));
    }
}
