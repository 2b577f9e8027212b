//! The `OutputWriter` trait implemented by all backend writers.

use og_graph::{AdjacencyGraph, NodeTable};

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
///
/// `write_*` calls stage their file; nothing is visible at the destination
/// until [`finish`](Self::finish) succeeds.
pub trait OutputWriter {
    /// Stage the adjacency graph file.
    fn write_graph(&mut self, graph: &AdjacencyGraph) -> OutputResult<()>;

    /// Stage the node table file.
    fn write_nodes(&mut self, nodes: &NodeTable) -> OutputResult<()>;

    /// Move every staged file into place, node table first.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
