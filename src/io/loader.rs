//! Reader for the text graph description format.
//!
//! A description is a whitespace separated stream of numbers: the vertex
//! count `N` followed by the `N * N` entries of the cost matrix in row-major
//! order, where `-1` marks a missing edge.
//!
//! ```text
//! 3
//! -1  1  5
//! -1 -1  1
//! -1 -1 -1
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};

use crate::config::{InputMode, DEFAULT_MAX_VERTICES};
use crate::cost::EdgeCost;
use crate::graph::{DenseGraph, Graph};
use crate::{Error, Result};

/// Validation settings for the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Largest accepted vertex count
    pub max_vertices: usize,
    /// Treatment of a description that ends before the matrix is complete
    pub mode: InputMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            mode: InputMode::Strict,
        }
    }
}

/// A graph built from a description, with bookkeeping about the read
#[derive(Debug, Clone)]
pub struct LoadedGraph<W>
where
    W: EdgeCost,
{
    pub graph: DenseGraph<W>,
    /// Number of matrix cells actually present in the input
    pub cells_read: usize,
}

impl<W> LoadedGraph<W>
where
    W: EdgeCost,
{
    /// Returns true if every matrix cell was present in the input
    pub fn is_complete(&self) -> bool {
        self.cells_read == self.graph.cell_count()
    }
}

/// Opens and parses a graph description file
pub fn load_path<W, P>(path: P, options: &LoadOptions) -> Result<LoadedGraph<W>>
where
    W: EdgeCost,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    info!("Opened {} for reading", path.display());
    load_reader(BufReader::new(file), options)
}

/// Parses a graph description from any buffered reader
pub fn load_reader<W, R>(mut reader: R, options: &LoadOptions) -> Result<LoadedGraph<W>>
where
    W: EdgeCost,
    R: BufRead,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text, options)
}

/// Parses a graph description held in memory
pub fn parse_str<W>(text: &str, options: &LoadOptions) -> Result<LoadedGraph<W>>
where
    W: EdgeCost,
{
    let mut tokens = text.split_whitespace();

    let header = tokens.next().ok_or(Error::Parse {
        position: 0,
        token: String::new(),
    })?;
    let declared: i64 = header.parse().map_err(|_| Error::Parse {
        position: 0,
        token: header.to_string(),
    })?;
    if declared < 1 || declared as u64 > options.max_vertices as u64 {
        return Err(Error::InvalidSize {
            vertex_count: declared,
            max: options.max_vertices,
        });
    }

    let mut graph = DenseGraph::with_max_vertices(declared as usize, options.max_vertices)?;
    info!("Number of nodes: {}", declared);

    let expected = graph.cell_count();
    let mut cells_read = 0;
    while cells_read < expected {
        let Some(token) = tokens.next() else {
            match options.mode {
                InputMode::Strict => {
                    return Err(Error::IncompleteInput {
                        expected,
                        read: cells_read,
                    });
                }
                InputMode::Lenient => {
                    warn!(
                        "Graph description ended after {} of {} costs; unread cells are treated as missing edges",
                        cells_read, expected
                    );
                    break;
                }
            }
        };

        let value = token
            .parse::<W>()
            .ok()
            .filter(EdgeCost::is_finite)
            .ok_or_else(|| Error::Parse {
                position: cells_read + 1,
                token: token.to_string(),
            })?;

        let cell = if value.is_no_edge_marker() {
            None
        } else {
            if value.is_negative() {
                warn!(
                    "Negative cost {} at row {}, column {}; shortest paths may be wrong",
                    value,
                    cells_read / graph.vertex_count(),
                    cells_read % graph.vertex_count()
                );
            }
            Some(value)
        };
        graph.set_linear(cells_read, cell)?;
        cells_read += 1;
    }

    let trailing = tokens.count();
    if trailing > 0 {
        debug!("Ignoring {} values after the cost matrix", trailing);
    }
    debug!(
        "Connectivity table read: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(LoadedGraph { graph, cells_read })
}
