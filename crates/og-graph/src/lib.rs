//! `og-graph` — OSM extract reading and road graph construction.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`element`] | `Element`, the owned markup tree every reader produces      |
//! | [`reader`]  | `parse_osm_xml`, `read_extract`, `read_osm_pbf` (`"pbf"`)   |
//! | [`nodes`]   | `NodeTable`, `build_node_table`                             |
//! | [`graph`]   | `AdjacencyGraph`, `Edge`, `build_adjacency_graph`           |
//! | [`build`]   | `MapGraph` (both builders in order), `BuildStats`           |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `pbf`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod build;
pub mod element;
pub mod error;
pub mod graph;
pub mod nodes;
pub mod reader;


pub use build::{BuildStats, MapGraph};
pub use element::Element;
pub use error::{GraphError, GraphResult};
pub use graph::{build_adjacency_graph, AdjacencyGraph, AdjacencyGraphBuilder, Edge};
pub use nodes::{build_node_table, NodeTable};
pub use reader::{parse_osm_xml, read_extract, read_osm_xml};

#[cfg(feature = "pbf")]
pub use reader::read_osm_pbf;

/// Insertion-ordered map with the Fx hasher.  Output files list ids in the
/// order they were first seen in the extract.
pub(crate) type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
