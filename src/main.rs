//! Clone probe
//!
//! Builds a small graph, clones it two ways (snapshot round-trip and
//! `Clone`), mutates the clones and reports whether anything leaked back
//! into the source.

use anyhow::{bail, Context, Result};
use digraph_store::{DirectedGraphStore, Edge, GraphData, GraphOptions, PropertyValue, Vertex};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const UPDATED_APPLE: &str = "apple property updated specifically on the clone";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("digraph-store v{}", digraph_store::version());

    let source = DirectedGraphStore::from_data(GraphData::with_options(
        GraphOptions::new("Source Digraph", "This is a graph that we will clone."),
        vec![
            Vertex::with_property("apple", "Edible skin"),
            Vertex::with_property("orange", "Inedible skin"),
        ],
        vec![Edge::with_property("apple", "orange", "Not the same")],
    ))
    .context("building source graph")?;

    let via_snapshot = DirectedGraphStore::from_data(source.to_plain_object())
        .context("rebuilding graph from snapshot")?;
    let via_clone = source.clone();

    let mut leaks = 0;
    for (label, clone) in [("snapshot", via_snapshot), ("clone", via_clone)] {
        leaks += probe(&source, clone, label)?;
    }

    info!("Source after probes:\n{:#}", source);
    if leaks > 0 {
        bail!("{} mutation(s) leaked back into the source graph", leaks);
    }
    info!("All copies are independent of the source");
    Ok(())
}

/// Mutate `clone` and count how many changes are visible on `source`.
fn probe(source: &DirectedGraphStore, mut clone: DirectedGraphStore, label: &str) -> Result<usize> {
    let mut leaks = 0;

    if source.stringify() == clone.stringify() {
        info!("[{}] contents match the source", label);
    } else {
        warn!("[{}] contents differ from the source", label);
        leaks += 1;
    }

    clone.set_vertex_property("apple", UPDATED_APPLE)?;
    let before = source.get_vertex_property("apple")?;
    let after = clone.get_vertex_property("apple")?;
    if before == after {
        warn!("[{}] vertex property update reflected back to source: {}", label, before);
        leaks += 1;
    } else {
        info!("[{}] source keeps {} while the copy holds {}", label, before, after);
    }

    clone.add_vertex("mango", PropertyValue::Null)?;
    clone.add_edge("apple", "mango", "Better together...")?;
    if source.is_edge("apple", "mango") {
        warn!("[{}] edge added to the copy reflected back to source", label);
        leaks += 1;
    } else {
        info!("[{}] edge added to the copy did not touch the source", label);
    }

    Ok(leaks)
}
