use std::fmt;

use crate::cost::EdgeCost;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// Largest vertex count a dense graph will allocate
///
/// The matrix holds `MAX_VERTICES²` cells (about 64 MiB of `Option<i64>`),
/// allocated up front. Loader and caller caps are clamped to this value.
pub const MAX_VERTICES: usize = 2_048;

/// A directed graph stored as a row-major cost matrix
///
/// Cell `u * vertex_count + v` holds the cost of the edge `u -> v`, or `None`
/// when there is no such edge. Every lookup is O(1), which suits small and
/// dense graphs; large sparse graphs are better served by
/// [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph<W>
where
    W: EdgeCost,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Flattened `vertex_count x vertex_count` matrix of edge costs
    cells: Vec<Option<W>>,
}

impl<W> DenseGraph<W>
where
    W: EdgeCost,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_max_vertices(vertex_count, MAX_VERTICES)
    }

    /// Creates an edgeless graph, rejecting vertex counts above `max_vertices`
    ///
    /// The effective cap is never larger than [`MAX_VERTICES`].
    pub fn with_max_vertices(vertex_count: usize, max_vertices: usize) -> Result<Self> {
        let max = max_vertices.min(MAX_VERTICES);
        if vertex_count == 0 || vertex_count > max {
            return Err(Error::InvalidSize {
                vertex_count: i64::try_from(vertex_count).unwrap_or(i64::MAX),
                max,
            });
        }

        Ok(DenseGraph {
            vertex_count,
            cells: vec![None; vertex_count * vertex_count],
        })
    }

    /// Number of cells in the flattened matrix
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Read access to the flattened matrix in row-major order
    pub fn cells(&self) -> &[Option<W>] {
        &self.cells
    }

    /// Writes the `index`-th flattened cell directly
    ///
    /// Used while populating the matrix from serialized, row-major input.
    pub fn set_linear(&mut self, index: usize, cost: Option<W>) -> Result<()> {
        let limit = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, limit })?;
        *cell = cost;
        Ok(())
    }

    fn cell_index(&self, from: usize, to: usize) -> Result<usize> {
        for index in [from, to] {
            if index >= self.vertex_count {
                return Err(Error::IndexOutOfRange {
                    index,
                    limit: self.vertex_count,
                });
            }
        }
        Ok(from * self.vertex_count + to)
    }
}

impl<W> Graph<W> for DenseGraph<W>
where
    W: EdgeCost,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }

        let start = vertex * self.vertex_count;
        let row = &self.cells[start..start + self.vertex_count];
        Box::new(
            row.iter()
                .enumerate()
                .filter_map(|(target, cost)| cost.map(|cost| (target, cost))),
        )
    }

    fn get_edge(&self, from: usize, to: usize) -> Result<Option<W>> {
        let index = self.cell_index(from, to)?;
        Ok(self.cells[index])
    }
}

impl<W> MutableGraph<W> for DenseGraph<W>
where
    W: EdgeCost,
{
    fn set_edge(&mut self, from: usize, to: usize, cost: W) -> Result<()> {
        let index = self.cell_index(from, to)?;
        self.cells[index] = Some(cost);
        Ok(())
    }

    fn clear_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let index = self.cell_index(from, to)?;
        self.cells[index] = None;
        Ok(())
    }
}

/// Writes the graph in the text description format: the vertex count on
/// the first line, then one matrix row per line with `-1` for missing edges.
impl<W> fmt::Display for DenseGraph<W>
where
    W: EdgeCost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count)?;
        for row in self.cells.chunks(self.vertex_count) {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                match cell {
                    Some(cost) => write!(f, "{}", cost)?,
                    None => write!(f, "{}", W::no_edge_marker())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
