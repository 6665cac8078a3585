//! Arbor - graph traversal and MST reporter
//!
//! Entry point: loads a graph description from a file, runs BFS and Prim
//! from a source node, and prints the resulting trees plus the binary /
//! complete-binary classification of the MST.

use std::env;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing::info;

use arbor::graph::{bfs, classify, prim, tree_weight};
use arbor::loader;
use arbor::report;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arbor=info".into()),
        )
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: arbor <graph-file> [source-id]"),
    };
    let source_id: i64 = match args.next() {
        Some(raw) => raw.parse().context("source id must be an integer")?,
        None => 0,
    };

    let store = loader::load_path(&path).with_context(|| format!("loading {path}"))?;
    info!(
        nodes = store.node_count(),
        edges = store.edge_count(),
        "graph loaded"
    );

    let source = store
        .find_node(source_id)
        .with_context(|| format!("source node {source_id} not found"))?;

    let mut out = io::stdout().lock();
    report::write_graph(&mut out, &store, "Graph")?;

    let search = bfs(&store, source);
    report::write_tree(&mut out, &store, &search, "BFS shortest-hop tree")?;

    let mst = prim(&store, source);
    report::write_tree(&mut out, &store, &mst, "Minimum Spanning Tree (MST)")?;
    writeln!(out, "Total MST weight: {}", tree_weight(&mst))?;

    let shape = classify(&store, &mst);
    writeln!(out, "Binary tree: {}", shape.binary)?;
    writeln!(out, "Complete binary tree: {}", shape.complete_binary)?;

    Ok(())
}
