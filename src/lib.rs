//! Dense Route - Dijkstra shortest paths with route reconstruction
//!
//! This library computes single-source shortest paths over a dense, weighted,
//! directed graph stored as a flattened cost matrix. Besides the cumulative
//! cost of reaching every vertex it records the predecessor of each vertex on
//! an optimal path, so the actual route to any destination can be rebuilt.
//!
//! The frontier is ordered by `(distance, vertex)`, which makes the recorded
//! predecessor chains deterministic when several optimal paths exist.

pub mod algorithm;
pub mod config;
pub mod cost;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{dijkstra::Dijkstra, SearchEvent, ShortestPathAlgorithm, ShortestPathResult};
pub use config::{InputMode, ReportFormat, RouteConfig};
pub use cost::EdgeCost;
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, DenseGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex count: {vertex_count} (expected 1 to {max})")]
    InvalidSize { vertex_count: i64, max: usize },

    #[error("Index {index} out of range (must be below {limit})")]
    IndexOutOfRange { index: usize, limit: usize },

    #[error("Invalid source vertex: {vertex} (graph has {vertex_count} vertices)")]
    InvalidSource { vertex: usize, vertex_count: usize },

    #[error("Graph description ended early: expected {expected} costs, read {read}")]
    IncompleteInput { expected: usize, read: usize },

    #[error("Output tables have lengths {distances} and {predecessors}, expected {expected}")]
    TableLengthMismatch {
        expected: usize,
        distances: usize,
        predecessors: usize,
    },

    #[error("Path cost overflow relaxing edge from {from} to {to}")]
    CostOverflow { from: usize, to: usize },

    #[error("Malformed value {token:?} at position {position} of the graph description")]
    Parse { position: usize, token: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
