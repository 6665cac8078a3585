//! Human-readable graph and tree reports
//!
//! Renders a graph listing (nodes then edges) and a tree listing (nodes
//! with the distance/predecessor summary left by a BFS or Prim run) to any
//! writer. No machine-readable format is defined.

use std::io::{self, Write};

use crate::graph::{GraphStore, NodeId, SearchState, VisitState};

fn visit_label(visit: VisitState) -> &'static str {
    match visit {
        VisitState::Unvisited => "unvisited",
        VisitState::Frontier => "frontier",
        VisitState::Done => "done",
    }
}

fn write_node_summary<W: Write>(
    out: &mut W,
    store: &GraphStore,
    state: &SearchState,
    node: NodeId,
) -> io::Result<()> {
    let distance = match state.distance[node] {
        Some(d) => d.to_string(),
        None => "inf".to_string(),
    };
    let predecessor = match state.predecessor[node] {
        Some(pred) => store.node(pred).id.to_string(),
        None => "-".to_string(),
    };
    writeln!(
        out,
        "  node {:>3}  distance {:>4}  predecessor {:>3}  [{}]",
        store.node(node).id,
        distance,
        predecessor,
        visit_label(state.visit[node])
    )
}

/// Write the raw graph listing: every node with its degree, then every edge
pub fn write_graph<W: Write>(out: &mut W, store: &GraphStore, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "Nodes")?;
    for node_id in store.node_ids() {
        let node = store.node(node_id);
        writeln!(out, "  node {:>3}  degree {}", node.id, node.adjacency.len())?;
    }
    writeln!(out, "Edges")?;
    for edge_id in store.edge_ids() {
        let edge = store.edge(edge_id);
        let (a, b) = edge.endpoints;
        writeln!(
            out,
            "  {} -- {}  (weight {})",
            store.node(a).id,
            store.node(b).id,
            edge.weight
        )?;
    }
    writeln!(out)
}

/// Write a tree listing: every node with the summary left by a search run
pub fn write_tree<W: Write>(
    out: &mut W,
    store: &GraphStore,
    state: &SearchState,
    title: &str,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for node_id in store.node_ids() {
        write_node_summary(out, store, state, node_id)?;
    }
    writeln!(out)
}
