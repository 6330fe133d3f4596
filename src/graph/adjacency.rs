use crate::cost::EdgeCost;
use crate::graph::dense::DenseGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Offers the same interface as [`DenseGraph`] for graphs where most vertex
/// pairs have no edge. Each list is kept sorted by target vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<W>
where
    W: EdgeCost,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, cost)]
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: EdgeCost,
{
    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidSize {
                vertex_count: 0,
                max: usize::MAX,
            });
        }

        Ok(AdjacencyGraph {
            outgoing: vec![Vec::new(); vertex_count],
        })
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.outgoing.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: vertex,
                limit: self.outgoing.len(),
            })
        }
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: EdgeCost,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn get_edge(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let edges = &self.outgoing[from];
        Ok(edges
            .binary_search_by_key(&to, |&(target, _)| target)
            .ok()
            .map(|position| edges[position].1))
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: EdgeCost,
{
    fn set_edge(&mut self, from: usize, to: usize, cost: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        // Update in place if the edge exists, otherwise insert keeping targets sorted
        let edges = &mut self.outgoing[from];
        match edges.binary_search_by_key(&to, |&(target, _)| target) {
            Ok(position) => edges[position].1 = cost,
            Err(position) => edges.insert(position, (to, cost)),
        }
        Ok(())
    }

    fn clear_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let edges = &mut self.outgoing[from];
        if let Ok(position) = edges.binary_search_by_key(&to, |&(target, _)| target) {
            edges.remove(position);
        }
        Ok(())
    }
}

impl<W> From<&DenseGraph<W>> for AdjacencyGraph<W>
where
    W: EdgeCost,
{
    fn from(dense: &DenseGraph<W>) -> Self {
        let outgoing = (0..dense.vertex_count())
            .map(|vertex| dense.outgoing_edges(vertex).collect())
            .collect();
        AdjacencyGraph { outgoing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_stay_sorted_and_update_in_place() {
        let mut graph: AdjacencyGraph<i32> = AdjacencyGraph::with_vertices(4).unwrap();
        graph.set_edge(0, 3, 9).unwrap();
        graph.set_edge(0, 1, 4).unwrap();
        graph.set_edge(0, 3, 2).unwrap();

        let outgoing: Vec<_> = graph.outgoing_edges(0).collect();
        assert_eq!(outgoing, vec![(1, 4), (3, 2)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.get_edge(0, 2).unwrap(), None);

        graph.clear_edge(0, 1).unwrap();
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn bounds_are_checked() {
        let mut graph: AdjacencyGraph<i32> = AdjacencyGraph::with_vertices(2).unwrap();
        assert!(matches!(
            graph.set_edge(0, 2, 1),
            Err(Error::IndexOutOfRange { index: 2, limit: 2 })
        ));
        assert!(AdjacencyGraph::<i32>::with_vertices(0).is_err());
    }

    #[test]
    fn converts_from_dense() {
        let mut dense: DenseGraph<i64> = DenseGraph::new(3).unwrap();
        dense.set_edge(2, 0, 5).unwrap();
        dense.set_edge(0, 1, 1).unwrap();

        let sparse = AdjacencyGraph::from(&dense);
        assert_eq!(sparse.vertex_count(), 3);
        assert_eq!(sparse.edge_count(), 2);
        assert_eq!(sparse.get_edge(2, 0).unwrap(), Some(5));
    }
}
