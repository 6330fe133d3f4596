use std::fmt::Debug;

use crate::cost::EdgeCost;
use crate::Result;

/// Trait representing a weighted directed graph with a fixed vertex set
pub trait Graph<W>: Debug
where
    W: EdgeCost,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the cost of the edge `from -> to`, or `None` if there is no edge
    fn get_edge(&self, from: usize, to: usize) -> Result<Option<W>>;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        matches!(self.get_edge(from, to), Ok(Some(_)))
    }
}

/// Trait for graphs whose edge costs can be rewritten
pub trait MutableGraph<W>: Graph<W>
where
    W: EdgeCost,
{
    /// Sets the cost of the directed edge `from -> to`, replacing any previous cost
    fn set_edge(&mut self, from: usize, to: usize, cost: W) -> Result<()>;

    /// Removes the edge `from -> to` if present
    fn clear_edge(&mut self, from: usize, to: usize) -> Result<()>;
}
