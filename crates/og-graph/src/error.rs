//! Graph-building error type.

use thiserror::Error;

use og_core::{CoreError, NodeId};

/// Errors produced by `og-graph`.
///
/// Every variant is fatal: the pipeline aborts and nothing is written.
/// Way members that reference unknown nodes are not errors; they are dropped
/// and counted in [`BuildStats`](crate::BuildStats).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{element}: missing required attribute `{attribute}`")]
    MissingAttribute {
        element:   String,
        attribute: &'static str,
    },

    #[error("{element}: attribute `{attribute}` = {value:?} is not a valid number")]
    Parse {
        element:   String,
        attribute: &'static str,
        value:     String,
    },

    #[error("node {0} appears more than once in the extract")]
    DuplicateNode(NodeId),

    #[error("distance computation failed: {0}")]
    Distance(#[from] CoreError),

    #[error("malformed map markup: {0}")]
    Markup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "pbf")]
    #[error("OSM PBF error: {0}")]
    Pbf(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
