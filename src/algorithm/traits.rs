use serde::Serialize;

use crate::cost::EdgeCost;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: EdgeCost,
{
    /// Distances from source to each vertex, `None` for unreachable vertices
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: EdgeCost,
{
    /// Number of vertices covered by the tables
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Minimum cost from the source to `vertex`, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Vertex preceding `vertex` on the recorded shortest path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Returns true if `vertex` can be reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Rebuilds the shortest path from the source to `target`
    ///
    /// Walks the predecessor chain backwards from `target`. Returns
    /// `Ok(None)` when `target` is unreachable, and fails with
    /// `IndexOutOfRange` when `target` is not a vertex of the graph.
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>> {
        let limit = self.vertex_count();
        if target >= limit {
            return Err(Error::IndexOutOfRange { index: target, limit });
        }
        if self.distances[target].is_none() {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors.get(current).copied().flatten() {
                Some(pred) => {
                    current = pred;
                    path.push(pred);
                }
                None => return Ok(None),
            }

            // A well-formed chain visits every vertex at most once
            if path.len() > limit {
                return Ok(None);
            }
        }

        path.reverse();
        Ok(Some(path))
    }
}

/// Progress notification emitted while a search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<W> {
    /// `vertex` left the frontier; its distance is final
    Settled { vertex: usize, distance: W },

    /// A shorter path to `vertex` through `via` was found
    Relaxed {
        vertex: usize,
        via: usize,
        previous: Option<W>,
        distance: W,
    },
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: EdgeCost,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target).ok().flatten()
    }
}
