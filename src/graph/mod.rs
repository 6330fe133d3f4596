pub mod adjacency;
pub mod dense;
pub mod generators;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use dense::{DenseGraph, MAX_VERTICES};
pub use traits::{Graph, MutableGraph};
