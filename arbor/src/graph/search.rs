//! Breadth-first search
//!
//! Computes shortest hop-count distances and a predecessor tree from a
//! source node. Search scratch lives in a per-run [`SearchState`] rather
//! than on the nodes themselves, so successive runs never interfere.

use std::collections::VecDeque;

use super::{GraphStore, NodeId};

/// Visit marker for a node during a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Not yet discovered
    Unvisited,
    /// Discovered but not fully processed
    Frontier,
    /// Fully processed (BFS) or committed to the tree (Prim)
    Done,
}

/// Per-run search scratch, one slot per node, indexed by `NodeId`
///
/// `distance` uses `None` as the infinite sentinel. Nodes unreachable from
/// the source keep it after a run; that is normal output, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub visit: Vec<VisitState>,
    pub distance: Vec<Option<i64>>,
    pub predecessor: Vec<Option<NodeId>>,
}

impl SearchState {
    /// Fresh scratch: every node unvisited, infinitely distant, parentless
    pub fn new(node_count: usize) -> Self {
        Self {
            visit: vec![VisitState::Unvisited; node_count],
            distance: vec![None; node_count],
            predecessor: vec![None; node_count],
        }
    }
}

/// Run breadth-first search from `source`
///
/// Distances are exact shortest hop counts; edge weights are ignored. The
/// predecessor assignments form a shortest-path tree of the source's
/// component (a forest slot stays empty for unreachable nodes).
pub fn bfs(store: &GraphStore, source: NodeId) -> SearchState {
    let mut state = SearchState::new(store.node_count());

    state.distance[source] = Some(0);
    state.visit[source] = VisitState::Frontier;

    // FIFO frontier; each entry carries its hop count so the loop never
    // re-reads a distance slot it already wrote
    let mut queue: VecDeque<(NodeId, i64)> = VecDeque::new();
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        for &(neighbor, _) in &store.node(current).adjacency {
            if state.visit[neighbor] == VisitState::Unvisited {
                state.visit[neighbor] = VisitState::Frontier;
                state.predecessor[neighbor] = Some(current);
                state.distance[neighbor] = Some(hops + 1);
                queue.push_back((neighbor, hops + 1));
            }
        }
        state.visit[current] = VisitState::Done;
    }

    state
}
