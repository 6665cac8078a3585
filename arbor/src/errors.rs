//! Error types for graph loading.
//! Defines the errors that can occur while parsing a textual graph
//! description into a `GraphStore`.

use thiserror::Error;

/// Represents errors produced at the parsing boundary.
///
/// Rows referencing unknown node ids are not errors; they are skipped
/// during load. These variants cover input the loader refuses to turn into
/// partially-constructed records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header line (expected node and edge counts)")]
    MissingHeader,
    #[error("malformed header {line:?}: expected two non-negative integers")]
    MalformedHeader { line: String },
    #[error("malformed edge row at line {line_number} {line:?}: expected three integers")]
    MalformedEdge { line_number: usize, line: String },
}
