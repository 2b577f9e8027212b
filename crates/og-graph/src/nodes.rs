//! Node table: every point entity's id mapped to its coordinate.

use tracing::debug;

use og_core::{Coordinate, DuplicatePolicy, NodeId};

use crate::{BuildStats, Element, FxIndexMap, GraphError, GraphResult};

/// Lookup from [`NodeId`] to [`Coordinate`], in first-seen order.
///
/// Built once by [`build_node_table`] and read-only afterwards.
/// Serializes as `{"<id>": [lat, lon], ...}`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeTable {
    nodes: FxIndexMap<NodeId, Coordinate>,
}

impl NodeTable {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<Coordinate> {
        self.nodes.get(id).copied()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Return the stored key for `id`, so callers can clone the shared id
    /// instead of allocating a new one.
    #[inline]
    pub fn resolve(&self, id: &str) -> Option<(&NodeId, Coordinate)> {
        self.nodes.get_key_value(id).map(|(k, &c)| (k, c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Coordinate)> {
        self.nodes.iter()
    }
}

/// Build the node table from the `node` children of `root`.
///
/// # Errors
///
/// - [`GraphError::MissingAttribute`] if a node lacks `id`, `lat` or `lon`.
/// - [`GraphError::Parse`] if `lat` or `lon` is not a number.
/// - [`GraphError::DuplicateNode`] under [`DuplicatePolicy::Reject`].
pub fn build_node_table(root: &Element, duplicates: DuplicatePolicy) -> GraphResult<NodeTable> {
    build_node_table_with_stats(root, duplicates, &mut BuildStats::default())
}

pub(crate) fn build_node_table_with_stats(
    root: &Element,
    duplicates: DuplicatePolicy,
    stats: &mut BuildStats,
) -> GraphResult<NodeTable> {
    let mut nodes = FxIndexMap::default();

    for (pos, node) in root.children_named("node").enumerate() {
        let Some(id) = node.attr("id") else {
            return Err(GraphError::MissingAttribute {
                element:   format!("node #{pos} (no id)"),
                attribute: "id",
            });
        };
        let lat = coordinate_attr(node, id, "lat")?;
        let lon = coordinate_attr(node, id, "lon")?;

        let id = NodeId::new(id);
        stats.point_entities += 1;

        if nodes.contains_key(&id) {
            match duplicates {
                DuplicatePolicy::Reject => return Err(GraphError::DuplicateNode(id)),
                DuplicatePolicy::LastWins => {
                    debug!(node = %id, "duplicate node id, keeping the later coordinate");
                    stats.duplicates_overwritten += 1;
                }
            }
        }
        // An overwrite keeps the key's original position.
        nodes.insert(id, Coordinate::new(lat, lon));
    }

    Ok(NodeTable { nodes })
}

fn coordinate_attr(node: &Element, id: &str, attribute: &'static str) -> GraphResult<f64> {
    let raw = node.attr(attribute).ok_or_else(|| GraphError::MissingAttribute {
        element: format!("node {id}"),
        attribute,
    })?;
    // `nan` and `inf` parse as f64 but have no JSON number form.
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GraphError::Parse {
            element: format!("node {id}"),
            attribute,
            value:   raw.to_owned(),
        })
}
