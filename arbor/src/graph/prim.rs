//! Minimum spanning tree via Prim's algorithm
//!
//! The frontier is a lazy-deletion binary heap: a node may be pushed several
//! times as cheaper connecting edges are found, and stale entries are
//! skipped on extraction by the committed check. No decrease-key support is
//! required; the `Done` visit marker is the committed/in-tree set.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{GraphStore, NodeId, SearchState, VisitState};

/// Run Prim's algorithm from `source`
///
/// For the connected component containing `source`, the predecessor
/// assignments form a minimum spanning tree and each node's `distance`
/// holds the weight of the edge connecting it to the tree (0 for the
/// source). Nodes outside the component keep the infinite sentinel.
///
/// Weight ties resolve by insertion order into the frontier, which is
/// deterministic for a fixed store.
pub fn prim(store: &GraphStore, source: NodeId) -> SearchState {
    let mut state = SearchState::new(store.node_count());

    state.distance[source] = Some(0);
    state.visit[source] = VisitState::Frontier;

    // Min-heap keyed by (connecting weight, insertion sequence); Reverse
    // flips BinaryHeap's max ordering
    let mut frontier: BinaryHeap<Reverse<(i64, u64, NodeId)>> = BinaryHeap::new();
    let mut sequence = 0u64;
    frontier.push(Reverse((0, sequence, source)));

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        if state.visit[current] == VisitState::Done {
            // Stale duplicate from before a cheaper edge was found
            continue;
        }
        state.visit[current] = VisitState::Done;

        for &(neighbor, edge_id) in &store.node(current).adjacency {
            if state.visit[neighbor] == VisitState::Done {
                continue;
            }
            // Adjacency entries always carry their backing edge; a stale
            // handle here is a store bug and the index panics
            let weight = store.edge(edge_id).weight;
            let better = match state.distance[neighbor] {
                Some(best) => weight < best,
                None => true,
            };
            if better {
                state.distance[neighbor] = Some(weight);
                state.predecessor[neighbor] = Some(current);
                state.visit[neighbor] = VisitState::Frontier;
                sequence += 1;
                frontier.push(Reverse((weight, sequence, neighbor)));
            }
        }
    }

    state
}

/// Total weight of the tree edges recorded in `state`
///
/// Every node with a predecessor contributes the weight of the edge that
/// connected it; the source contributes nothing.
pub fn tree_weight(state: &SearchState) -> i64 {
    state
        .predecessor
        .iter()
        .zip(&state.distance)
        .filter(|(pred, _)| pred.is_some())
        .filter_map(|(_, distance)| *distance)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    /// Reference MST total weight via Kruskal with union-find
    fn kruskal_weight(store: &GraphStore) -> i64 {
        fn find(parent: &mut [usize], x: usize) -> usize {
            let mut root = x;
            while parent[root] != root {
                root = parent[root];
            }
            let mut walk = x;
            while parent[walk] != root {
                let next = parent[walk];
                parent[walk] = root;
                walk = next;
            }
            root
        }

        let mut parent: Vec<usize> = (0..store.node_count()).collect();
        let mut edges: Vec<(i64, NodeId, NodeId)> = store
            .edge_ids()
            .map(|id| {
                let edge = store.edge(id);
                (edge.weight, edge.endpoints.0, edge.endpoints.1)
            })
            .collect();
        edges.sort();

        let mut total = 0;
        for (weight, a, b) in edges {
            let ra = find(&mut parent, a);
            let rb = find(&mut parent, b);
            if ra != rb {
                parent[ra] = rb;
                total += weight;
            }
        }
        total
    }

    #[test]
    fn path_graph_spanning_tree() {
        let store = build_graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1)]);
        let state = prim(&store, 0);

        assert_eq!(state.predecessor, vec![None, Some(0), Some(1), Some(2)]);
        assert_eq!(tree_weight(&state), 4);
        assert!(state.visit.iter().all(|&v| v == VisitState::Done));
    }

    #[test]
    fn heavy_cycle_edge_is_excluded() {
        // Square 0-1-2-3-0 plus a cheap diagonal; the weight-9 edge loses
        let store = build_graph(
            4,
            &[(0, 1, 1), (1, 2, 2), (2, 3, 9), (3, 0, 3), (1, 3, 2)],
        );
        let state = prim(&store, 0);

        assert_eq!(tree_weight(&state), kruskal_weight(&store));
        assert_eq!(tree_weight(&state), 5);
        assert_eq!(state.predecessor[2], Some(1));
        assert_eq!(state.predecessor[3], Some(1));
    }

    #[test]
    fn stale_frontier_entries_are_skipped() {
        // Node 3 first enters the frontier at weight 8 through node 1, then
        // improves to 1 through node 2; the stale entry must be ignored
        let store = build_graph(4, &[(0, 1, 1), (0, 2, 2), (1, 3, 8), (2, 3, 1)]);
        let state = prim(&store, 0);

        assert_eq!(state.distance[3], Some(1));
        assert_eq!(state.predecessor[3], Some(2));
        assert_eq!(tree_weight(&state), kruskal_weight(&store));
    }

    #[test]
    fn total_weight_matches_kruskal_reference() {
        let store = build_graph(
            6,
            &[
                (0, 1, 4),
                (0, 2, 3),
                (1, 2, 1),
                (1, 3, 2),
                (2, 3, 4),
                (3, 4, 2),
                (4, 5, 6),
                (2, 5, 5),
            ],
        );
        let state = prim(&store, 0);

        assert_eq!(tree_weight(&state), kruskal_weight(&store));
        // Spanning: every node of the component has a parent except the source
        assert_eq!(
            state.predecessor.iter().filter(|p| p.is_some()).count(),
            store.node_count() - 1
        );
    }

    #[test]
    fn any_source_yields_the_same_total_weight() {
        let store = build_graph(
            5,
            &[(0, 1, 2), (1, 2, 3), (2, 3, 1), (3, 4, 4), (4, 0, 5), (1, 3, 2)],
        );
        let expected = kruskal_weight(&store);

        for source in store.node_ids() {
            assert_eq!(tree_weight(&prim(&store, source)), expected);
        }
    }

    #[test]
    fn disconnected_component_stays_infinite() {
        let store = build_graph(5, &[(0, 1, 1), (1, 2, 2), (3, 4, 1)]);
        let state = prim(&store, 0);

        assert_eq!(state.distance[3], None);
        assert_eq!(state.distance[4], None);
        assert_eq!(state.predecessor[3], None);
        assert_eq!(state.visit[3], VisitState::Unvisited);
        assert_eq!(tree_weight(&state), 3);
    }

    #[test]
    fn rerunning_is_idempotent() {
        let store = build_graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 0, 2)]);

        let first = prim(&store, 0);
        let second = prim(&store, 0);

        assert_eq!(first, second);
    }
}
