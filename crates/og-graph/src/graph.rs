//! Weighted adjacency graph and its builder.
//!
//! # Data layout
//!
//! An insertion-ordered map from node to its outgoing edge list.  Every
//! road segment `a — b` is stored twice, as `a → b` and `b → a`, carrying
//! the same weight value.  Nodes enter the map the first time a segment
//! touches them; lists only ever grow.
//!
//! Parallel edges are kept: two ways that both join `a` and `b` leave two
//! entries in each list.

use og_core::{haversine, DistanceUnit, NodeId};

use crate::{BuildStats, Element, FxIndexMap, GraphResult, NodeTable};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One directed half of a road segment.
///
/// Serializes as a two-element array `[neighbor, weight]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(NodeId, f64)", into = "(NodeId, f64)"))]
pub struct Edge {
    pub neighbor: NodeId,
    /// Great-circle length of the segment, in the build's distance unit.
    pub weight:   f64,
}

impl From<(NodeId, f64)> for Edge {
    fn from((neighbor, weight): (NodeId, f64)) -> Self {
        Self { neighbor, weight }
    }
}

impl From<Edge> for (NodeId, f64) {
    fn from(e: Edge) -> Self {
        (e.neighbor, e.weight)
    }
}

// ── AdjacencyGraph ────────────────────────────────────────────────────────────

/// Undirected road graph stored as symmetric adjacency lists.
///
/// Do not construct directly; use [`AdjacencyGraphBuilder`] or
/// [`build_adjacency_graph`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AdjacencyGraph {
    adj: FxIndexMap<NodeId, Vec<Edge>>,
}

impl AdjacencyGraph {
    /// Number of nodes that take part in at least one segment.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of directed edge entries (twice the segment count).
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adj.contains_key(id)
    }

    /// Edges leaving `id`, in insertion order.  Empty for unknown nodes.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[Edge])> {
        self.adj.iter().map(|(id, edges)| (id, edges.as_slice()))
    }
}

// ── AdjacencyGraphBuilder ─────────────────────────────────────────────────────

/// Accumulate segments, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use og_core::NodeId;
/// use og_graph::AdjacencyGraphBuilder;
///
/// let mut b = AdjacencyGraphBuilder::new();
/// b.add_segment(&NodeId::new("1"), &NodeId::new("2"), 120.0);
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2); // bidirectional
/// ```
#[derive(Default)]
pub struct AdjacencyGraphBuilder {
    adj: FxIndexMap<NodeId, Vec<Edge>>,
}

impl AdjacencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add edges in **both directions** for the segment `a — b`.
    ///
    /// `a`'s list gets its entry before `b`'s, so a first-seen `a` is
    /// also inserted into the map first.
    pub fn add_segment(&mut self, a: &NodeId, b: &NodeId, weight: f64) {
        self.adj
            .entry(a.clone())
            .or_default()
            .push(Edge { neighbor: b.clone(), weight });
        self.adj
            .entry(b.clone())
            .or_default()
            .push(Edge { neighbor: a.clone(), weight });
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn build(self) -> AdjacencyGraph {
        AdjacencyGraph { adj: self.adj }
    }
}

// ── Construction from ways ────────────────────────────────────────────────────

/// Build the road graph from the `way` children of `root`.
///
/// A way counts as a road when any of its `tag` children has `k == road_key`;
/// the tag's value is ignored.  Member `nd` references that are missing from
/// `nodes` are dropped before consecutive members are joined, so a gap in
/// the extract shortens the way instead of failing the build.
///
/// # Errors
///
/// Returns [`GraphError::Distance`](crate::GraphError::Distance) if a member
/// coordinate is off the globe.
pub fn build_adjacency_graph(
    root: &Element,
    nodes: &NodeTable,
    road_key: &str,
    unit: DistanceUnit,
) -> GraphResult<AdjacencyGraph> {
    build_adjacency_graph_with_stats(root, nodes, road_key, unit, &mut BuildStats::default())
}

pub(crate) fn build_adjacency_graph_with_stats(
    root: &Element,
    nodes: &NodeTable,
    road_key: &str,
    unit: DistanceUnit,
    stats: &mut BuildStats,
) -> GraphResult<AdjacencyGraph> {
    let mut builder = AdjacencyGraphBuilder::new();
    let mut members = Vec::new();

    for way in root.children_named("way") {
        stats.line_entities += 1;
        if !is_road(way, road_key) {
            continue;
        }
        stats.road_line_entities += 1;

        members.clear();
        for nd in way.children_named("nd") {
            match nd.attr("ref").and_then(|r| nodes.resolve(r)) {
                Some(member) => members.push(member),
                None => stats.unresolved_refs += 1,
            }
        }

        for pair in members.windows(2) {
            let ((a, pos_a), (b, pos_b)) = (pair[0], pair[1]);
            let d = haversine(pos_a, pos_b, unit)?;
            builder.add_segment(a, b, d);
            stats.segments += 1;
        }
    }

    Ok(builder.build())
}

/// `true` if any tag on `way` has key `road_key`.
fn is_road(way: &Element, road_key: &str) -> bool {
    way.children_named("tag")
        .any(|tag| tag.attr("k") == Some(road_key))
}
