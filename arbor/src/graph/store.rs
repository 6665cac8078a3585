//! In-memory graph storage
//!
//! `GraphStore` owns every node and edge in two arenas addressed by
//! `NodeId` / `EdgeId` index handles. Adjacency lists store the neighbor
//! together with the handle of the edge that connects it, so a neighbor's
//! backing edge is always reachable in O(1) through the same integer handles.

use tracing::warn;

/// Index of a node in the store's arena
pub type NodeId = usize;

/// Index of an edge in the store's arena
pub type EdgeId = usize;

/// A graph vertex
#[derive(Debug, Clone)]
pub struct Node {
    /// External identity from the input description
    pub id: i64,

    /// Neighbors paired with the edge that connects them
    pub adjacency: Vec<(NodeId, EdgeId)>,
}

/// An undirected weighted connection between two nodes
///
/// The endpoint pair is stored in insertion order but is semantically
/// unordered: `(a, b)` and `(b, a)` are the same edge on lookup.
#[derive(Debug, Clone)]
pub struct Edge {
    pub endpoints: (NodeId, NodeId),
    pub weight: i64,
}

/// Owner of all nodes and edges
///
/// `total_nodes` / `total_edges` start from the declared header counts of the
/// input and are bumped whenever actual storage grows past them, so they
/// always reflect the larger of declared and actual.
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    total_nodes: usize,
    total_edges: usize,
}

impl GraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store seeded with the declared header counts
    pub fn with_declared(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            total_nodes: nodes,
            total_edges: edges,
        }
    }

    /// Clear node and edge storage and zero both counts
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.total_nodes = 0;
        self.total_edges = 0;
    }

    /// Append a node with the given external identity
    pub fn insert_node(&mut self, id: i64) -> NodeId {
        let handle = self.nodes.len();
        self.nodes.push(Node {
            id,
            adjacency: Vec::new(),
        });
        if self.nodes.len() > self.total_nodes {
            self.total_nodes = self.nodes.len();
        }
        handle
    }

    /// Insert an undirected edge between two registered nodes
    ///
    /// Both endpoints gain an adjacency entry pointing at the new edge.
    /// The typed handles guarantee the endpoints were inserted into this
    /// store; handles from another store are a caller bug.
    pub fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: i64) -> EdgeId {
        let handle = self.edges.len();
        self.edges.push(Edge {
            endpoints: (a, b),
            weight,
        });
        self.nodes[a].adjacency.push((b, handle));
        self.nodes[b].adjacency.push((a, handle));
        if self.edges.len() > self.total_edges {
            self.total_edges = self.edges.len();
        }
        handle
    }

    /// Look up a node by its external identity
    ///
    /// Linear scan. A miss is a recoverable lookup failure: it is reported
    /// here and the caller decides whether to skip the operation.
    pub fn find_node(&self, id: i64) -> Option<NodeId> {
        let found = self.nodes.iter().position(|node| node.id == id);
        if found.is_none() {
            warn!(id, "node not found");
        }
        found
    }

    /// Look up the edge connecting two nodes, in either orientation
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.edges
            .iter()
            .position(|edge| edge.endpoints == (a, b) || edge.endpoints == (b, a))
    }

    /// Access a node by handle
    ///
    /// An out-of-range handle means the caller holds a handle from another
    /// store or across a reset; that is a bug, and the index panic is the
    /// intended hard failure.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Access an edge by handle; panics on a stale handle like [`Self::node`]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Number of nodes actually stored
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges actually stored
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The larger of the declared and actual node count
    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    /// The larger of the declared and actual edge count
    pub fn total_edges(&self) -> usize {
        self.total_edges
    }

    /// Iterate node handles in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.nodes.len()
    }

    /// Iterate edge handles in insertion order
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        0..self.edges.len()
    }
}
