//! Graph build configuration.

use crate::DistanceUnit;

/// What to do when the extract contains the same node id twice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// The later occurrence replaces the earlier one.
    #[default]
    LastWins,
    /// Abort the build with `GraphError::DuplicateNode`.
    Reject,
}

/// Top-level build configuration.
///
/// Typically assembled from command-line flags by the application crate and
/// passed to `og_graph::MapGraph::from_element`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Tag key whose presence marks a way as traversable.  Default: `highway`.
    pub road_key: String,

    /// Unit of every edge weight.  Default: metres.
    pub unit: DistanceUnit,

    /// Handling of repeated node ids.  Default: last write wins.
    pub duplicates: DuplicatePolicy,
}

impl BuildConfig {
    pub fn road_key(mut self, key: impl Into<String>) -> Self {
        self.road_key = key.into();
        self
    }

    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            road_key:   "highway".to_owned(),
            unit:       DistanceUnit::Meters,
            duplicates: DuplicatePolicy::LastWins,
        }
    }
}
