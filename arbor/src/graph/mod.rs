//! Graph data structures and algorithms
//!
//! This module contains the core graph types:
//! - `GraphStore`: arena-owned nodes and edges with indexed adjacency
//! - `SearchState`: per-run search scratch (visit marker, distance, predecessor)
//! - `bfs` / `prim`: shortest-hop and minimum-spanning-tree engines
//! - `shape`: binary / complete-binary classification of predecessor trees

mod prim;
mod search;
mod shape;
mod store;

pub use prim::{prim, tree_weight};
pub use search::{bfs, SearchState, VisitState};
pub use shape::{classify, is_binary, is_complete_binary, TreeShape};
pub use store::{Edge, EdgeId, GraphStore, Node, NodeId};
