pub mod dijkstra;
pub mod traits;

pub use traits::{SearchEvent, ShortestPathAlgorithm, ShortestPathResult};
