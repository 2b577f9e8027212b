//! `export` — write a finished build through any `OutputWriter`.

use tracing::info;

use og_graph::MapGraph;

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write the graph, then the node table, then commit both.
///
/// If staging fails the error is returned before `finish`, so neither
/// destination file is created or replaced.  See
/// [`OutputWriter::finish`] for the commit order.
pub fn export<W: OutputWriter>(writer: &mut W, map: &MapGraph) -> OutputResult<()> {
    writer.write_graph(&map.graph)?;
    writer.write_nodes(&map.nodes)?;
    writer.finish()?;
    info!(
        graph_nodes = map.graph.node_count(),
        table_nodes = map.nodes.len(),
        "graph and nodes saved"
    );
    Ok(())
}
