//! Input and output around the shortest path engine: reading graph
//! descriptions, picking the source vertex and rendering results.

pub mod loader;
pub mod report;
pub mod source;

pub use loader::{load_path, load_reader, parse_str, LoadOptions, LoadedGraph};
pub use report::{Report, ReportRow};
pub use source::{parse_source, prompt_source, resolve_source};
