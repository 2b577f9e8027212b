//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `edges.csv` — one row per directed edge entry
//! - `nodes.csv` — one row per node table entry

use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use og_graph::{AdjacencyGraph, NodeTable};

use crate::staged::StagedFile;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the graph and node table to two CSV files.
pub struct CsvWriter {
    edges_path: PathBuf,
    nodes_path: PathBuf,
    edges:      Option<StagedFile>,
    nodes:      Option<StagedFile>,
    finished:   bool,
}

impl CsvWriter {
    /// Target `edges.csv` and `nodes.csv` in `dir`, creating `dir` if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            edges_path: dir.join("edges.csv"),
            nodes_path: dir.join("nodes.csv"),
            edges:      None,
            nodes:      None,
            finished:   false,
        })
    }

    /// Override the two file names (still relative to the output directory).
    pub fn with_file_names(mut self, edges: &str, nodes: &str) -> Self {
        let dir = self.edges_path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.edges_path = dir.join(edges);
        self.nodes_path = dir.join(nodes);
        self
    }
}

impl OutputWriter for CsvWriter {
    fn write_graph(&mut self, graph: &AdjacencyGraph) -> OutputResult<()> {
        let mut staged = StagedFile::new(self.edges_path.clone())?;
        let mut w = Writer::from_writer(staged.file());
        w.write_record(["from", "to", "weight"])?;
        for (from, edges) in graph.iter() {
            for e in edges {
                w.write_record([from.as_str(), e.neighbor.as_str(), e.weight.to_string().as_str()])?;
            }
        }
        w.flush()?;
        drop(w);
        debug!(dest = %staged.dest().display(), "staged CSV edges");
        self.edges = Some(staged);
        Ok(())
    }

    fn write_nodes(&mut self, nodes: &NodeTable) -> OutputResult<()> {
        let mut staged = StagedFile::new(self.nodes_path.clone())?;
        let mut w = Writer::from_writer(staged.file());
        w.write_record(["node_id", "lat", "lon"])?;
        for (id, pos) in nodes.iter() {
            w.write_record([id.as_str(), pos.lat.to_string().as_str(), pos.lon.to_string().as_str()])?;
        }
        w.flush()?;
        drop(w);
        debug!(dest = %staged.dest().display(), "staged CSV nodes");
        self.nodes = Some(staged);
        Ok(())
    }

    /// Commits the node table first, so a committed edges file never names
    /// ids missing from the node file. The two renames are separate: if the
    /// second fails, the new node file sits next to the previous edges file.
    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for staged in [self.nodes.take(), self.edges.take()].into_iter().flatten() {
            staged.commit()?;
        }
        Ok(())
    }
}
