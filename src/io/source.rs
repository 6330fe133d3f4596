//! Choosing the source vertex on behalf of an interactive caller.
//!
//! The engine rejects a source outside the graph. These helpers implement
//! the friendlier policy of the command line tool: anything unusable falls
//! back to vertex `0` with a warning.

use std::io::{BufRead, Write};

use log::warn;

use crate::Result;

/// Maps a requested source onto a valid vertex, defaulting to `0`
pub fn resolve_source(requested: Option<i64>, vertex_count: usize) -> usize {
    match requested {
        Some(vertex) if vertex >= 0 && (vertex as u64) < vertex_count as u64 => vertex as usize,
        Some(vertex) => {
            warn!(
                "Source node {} is outside 0 to {}; using 0 as source node",
                vertex,
                vertex_count.saturating_sub(1)
            );
            0
        }
        None => {
            warn!("No usable source node given; using 0 as source node");
            0
        }
    }
}

/// Parses a line of user input as a source vertex
pub fn parse_source(input: &str, vertex_count: usize) -> usize {
    resolve_source(input.trim().parse().ok(), vertex_count)
}

/// Asks for a source vertex on `output` and reads the answer from `input`
pub fn prompt_source<R, W>(mut input: R, mut output: W, vertex_count: usize) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "Enter source node number [0 to {}]: ",
        vertex_count.saturating_sub(1)
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_source(&line, vertex_count))
}
