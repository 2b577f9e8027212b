//! Whole-extract build: node table first, then the road graph.

use std::fmt;

use tracing::info;

use og_core::BuildConfig;

use crate::graph::build_adjacency_graph_with_stats;
use crate::nodes::build_node_table_with_stats;
use crate::{AdjacencyGraph, Element, GraphResult, NodeTable};

/// Counters collected while building a [`MapGraph`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// `node` elements read (duplicates included).
    pub point_entities:         usize,
    /// Node ids seen again and overwritten under last-wins.
    pub duplicates_overwritten: usize,
    /// `way` elements read.
    pub line_entities:          usize,
    /// Ways carrying the road tag.
    pub road_line_entities:     usize,
    /// Road way members dropped because their node is not in the table.
    pub unresolved_refs:        usize,
    /// Segments added; each contributes two edge entries.
    pub segments:               usize,
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {}/{} ways are roads, {} segments, {} unresolved refs",
            self.point_entities,
            self.road_line_entities,
            self.line_entities,
            self.segments,
            self.unresolved_refs,
        )
    }
}

/// The two build products plus the counters gathered along the way.
#[derive(Clone, Debug)]
pub struct MapGraph {
    pub nodes: NodeTable,
    pub graph: AdjacencyGraph,
    pub stats: BuildStats,
}

impl MapGraph {
    /// Build the node table, then the adjacency graph over it.
    ///
    /// Fails fast: the first error aborts the build and no partial result
    /// is returned.
    pub fn from_element(root: &Element, config: &BuildConfig) -> GraphResult<Self> {
        let mut stats = BuildStats::default();

        let nodes = build_node_table_with_stats(root, config.duplicates, &mut stats)?;
        info!(
            nodes = nodes.len(),
            overwritten = stats.duplicates_overwritten,
            "node table built"
        );

        let graph = build_adjacency_graph_with_stats(
            root,
            &nodes,
            &config.road_key,
            config.unit,
            &mut stats,
        )?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            roads = stats.road_line_entities,
            unresolved = stats.unresolved_refs,
            unit = config.unit.symbol(),
            "adjacency graph built"
        );

        Ok(Self { nodes, graph, stats })
    }
}
