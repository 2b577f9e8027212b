//! JSON output backend.
//!
//! Creates two files in the configured output directory:
//! - `graph.json` — `{"<id>": [["<neighbor>", weight], …], …}`
//! - `nodes.json` — `{"<id>": [lat, lon], …}`
//!
//! Keys appear in first-seen order.  The graph file carries no coordinates;
//! consumers join the two files on node id.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use og_graph::{AdjacencyGraph, NodeTable};

use crate::staged::StagedFile;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the graph and node table as two JSON documents.
pub struct JsonWriter {
    graph_path: PathBuf,
    nodes_path: PathBuf,
    pretty:     bool,
    graph:      Option<StagedFile>,
    nodes:      Option<StagedFile>,
    finished:   bool,
}

impl JsonWriter {
    /// Target `graph.json` and `nodes.json` in `dir`, creating `dir` if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            graph_path: dir.join("graph.json"),
            nodes_path: dir.join("nodes.json"),
            pretty:     false,
            graph:      None,
            nodes:      None,
            finished:   false,
        })
    }

    /// Override the two file names (still relative to the output directory).
    pub fn with_file_names(mut self, graph: &str, nodes: &str) -> Self {
        let dir = self.graph_path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.graph_path = dir.join(graph);
        self.nodes_path = dir.join(nodes);
        self
    }

    /// Indent the output for human reading.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn stage<T: Serialize>(&self, dest: &Path, value: &T) -> OutputResult<StagedFile> {
        let mut staged = StagedFile::new(dest.to_path_buf())?;
        let mut out = BufWriter::new(staged.file());
        if self.pretty {
            serde_json::to_writer_pretty(&mut out, value)?;
        } else {
            serde_json::to_writer(&mut out, value)?;
        }
        out.flush()?;
        drop(out);
        debug!(dest = %staged.dest().display(), "staged JSON output");
        Ok(staged)
    }
}

impl OutputWriter for JsonWriter {
    fn write_graph(&mut self, graph: &AdjacencyGraph) -> OutputResult<()> {
        self.graph = Some(self.stage(&self.graph_path, graph)?);
        Ok(())
    }

    fn write_nodes(&mut self, nodes: &NodeTable) -> OutputResult<()> {
        self.nodes = Some(self.stage(&self.nodes_path, nodes)?);
        Ok(())
    }

    /// Commits the node table first, so a committed graph file never names
    /// ids missing from the node file. The two renames are separate: if the
    /// second fails, the new node file sits next to the previous graph file.
    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for staged in [self.nodes.take(), self.graph.take()].into_iter().flatten() {
            staged.commit()?;
        }
        Ok(())
    }
}
