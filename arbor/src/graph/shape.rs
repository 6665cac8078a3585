//! Tree-shape classification over predecessor assignments
//!
//! Reads the predecessor tree left by a BFS or Prim run; it never traverses
//! on its own. A node's children are its adjacent nodes other than its
//! predecessor, so the counts are only meaningful after a run has assigned
//! predecessors.

use super::{GraphStore, NodeId, SearchState};

/// Classification flags for a predecessor tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeShape {
    pub binary: bool,
    pub complete_binary: bool,
}

/// Number of non-predecessor neighbors of `node`
fn child_count(store: &GraphStore, state: &SearchState, node: NodeId) -> usize {
    store
        .node(node)
        .adjacency
        .iter()
        .filter(|(neighbor, _)| Some(*neighbor) != state.predecessor[node])
        .count()
}

/// True iff every node has at most two children
pub fn is_binary(store: &GraphStore, state: &SearchState) -> bool {
    store
        .node_ids()
        .all(|node| child_count(store, state, node) <= 2)
}

/// True iff no node has exactly one child
///
/// Deliberately narrower than the textbook definition: it does not check
/// balance or that levels fill left to right, only the zero-or-two-children
/// property over whatever tree the predecessor pointers encode.
pub fn is_complete_binary(store: &GraphStore, state: &SearchState) -> bool {
    store
        .node_ids()
        .all(|node| child_count(store, state, node) != 1)
}

/// Both classification flags, for reporting
pub fn classify(store: &GraphStore, state: &SearchState) -> TreeShape {
    TreeShape {
        binary: is_binary(store, state),
        complete_binary: is_complete_binary(store, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::bfs;

    fn build_graph(n: i64, edges: &[(i64, i64, i64)]) -> GraphStore {
        let mut store = GraphStore::new();
        for id in 0..n {
            store.insert_node(id);
        }
        for &(a, b, weight) in edges {
            let a = store.find_node(a).unwrap();
            let b = store.find_node(b).unwrap();
            store.insert_edge(a, b, weight);
        }
        store
    }

    #[test]
    fn path_is_binary_but_not_complete() {
        let store = build_graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1)]);
        let state = bfs(&store, 0);

        // Every interior node has exactly one child
        assert!(is_binary(&store, &state));
        assert!(!is_complete_binary(&store, &state));
    }

    #[test]
    fn star_with_two_leaves_is_complete_binary() {
        let store = build_graph(3, &[(0, 1, 1), (0, 2, 1)]);
        let state = bfs(&store, 0);

        let shape = classify(&store, &state);
        assert!(shape.binary);
        assert!(shape.complete_binary);
    }

    #[test]
    fn star_with_three_leaves_is_not_binary() {
        let store = build_graph(4, &[(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
        let state = bfs(&store, 0);

        // The center has three children; the leaves each have none, so the
        // narrow complete check still passes
        assert!(!is_binary(&store, &state));
        assert!(is_complete_binary(&store, &state));
    }

    #[test]
    fn perfect_binary_tree_passes_both_checks() {
        //       0
        //      / \
        //     1   2
        //    / \ / \
        //   3  4 5  6
        let store = build_graph(
            7,
            &[
                (0, 1, 1),
                (0, 2, 1),
                (1, 3, 1),
                (1, 4, 1),
                (2, 5, 1),
                (2, 6, 1),
            ],
        );
        let state = bfs(&store, 0);

        let shape = classify(&store, &state);
        assert!(shape.binary);
        assert!(shape.complete_binary);
    }

    #[test]
    fn non_tree_edge_counts_toward_children() {
        // Triangle from 0: node 1 keeps its edge to 2 even though 2's parent
        // is 0, so both 1 and 2 have a non-predecessor neighbor
        let store = build_graph(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        let state = bfs(&store, 0);

        assert!(is_binary(&store, &state));
        assert!(!is_complete_binary(&store, &state));
    }
}
