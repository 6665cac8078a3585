//! Graph description loader
//!
//! Parses the textual graph format: a header line with declared node and
//! edge counts, then one edge per line as `src dest weight`. Tokens may be
//! comma-separated and wrapped in angle brackets; normalization maps both
//! to plain whitespace before parsing. Nodes `0..declared-1` are created
//! before any edge is inserted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::errors::LoadError;
use crate::graph::GraphStore;

/// Strip optional angle brackets and turn commas into spaces
fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('<').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('>').unwrap_or(trimmed);
    trimmed.replace(',', " ")
}

/// Parse every whitespace-separated token as an integer, or nothing
fn parse_integers(line: &str) -> Option<Vec<i64>> {
    normalize_line(line)
        .split_whitespace()
        .map(|token| token.parse().ok())
        .collect()
}

/// Load a graph from a reader
///
/// A malformed header or edge row is an error; a well-formed row naming an
/// unknown node id is dropped (the store reports the miss) and the edge
/// count is unaffected.
pub fn load<R: BufRead>(input: R) -> Result<GraphStore, LoadError> {
    let mut lines = input.lines();

    let header = lines.next().ok_or(LoadError::MissingHeader)??;
    let (declared_nodes, declared_edges) = match parse_integers(&header).as_deref() {
        Some(&[nodes, edges]) if nodes >= 0 && edges >= 0 => (nodes as usize, edges as usize),
        _ => return Err(LoadError::MalformedHeader { line: header }),
    };

    let mut store = GraphStore::with_declared(declared_nodes, declared_edges);
    for id in 0..declared_nodes as i64 {
        store.insert_node(id);
    }

    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // The header was line 1
        let line_number = index + 2;

        let (src_id, dest_id, weight) = match parse_integers(&line).as_deref() {
            Some(&[src, dest, weight]) => (src, dest, weight),
            _ => return Err(LoadError::MalformedEdge { line_number, line }),
        };

        match (store.find_node(src_id), store.find_node(dest_id)) {
            (Some(src), Some(dest)) => {
                store.insert_edge(src, dest, weight);
            }
            // Unknown endpoint: find_node reported the miss, drop the row
            _ => continue,
        }
    }

    debug!(
        nodes = store.node_count(),
        edges = store.edge_count(),
        "graph loaded"
    );
    Ok(store)
}

/// Load a graph from a file on disk
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<GraphStore, LoadError> {
    let file = File::open(path)?;
    load(BufReader::new(file))
}
