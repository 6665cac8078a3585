//! Arbor - Graph Traversal and Spanning-Tree Engine
//!
//! Builds an in-memory undirected weighted graph from a textual description
//! and answers three structural questions over it:
//! - Shortest hop-count distances from a source (breadth-first search)
//! - A minimum-spanning-tree predecessor structure (Prim's algorithm)
//! - Whether the resulting predecessor tree is binary / complete-binary

pub mod errors;
pub mod graph;
pub mod loader;
pub mod report;
