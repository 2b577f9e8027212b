//! `og-output` — graph and node table writers for osm_graph.
//!
//! Two backends are provided:
//!
//! | Writer        | Files created (default names)   | Layout                                   |
//! |---------------|---------------------------------|------------------------------------------|
//! | [`JsonWriter`] | `graph.json`, `nodes.json`     | `{id: [[nb, w], …]}`, `{id: [lat, lon]}` |
//! | [`CsvWriter`]  | `edges.csv`, `nodes.csv`       | `from,to,weight`, `node_id,lat,lon`      |
//!
//! Both implement [`OutputWriter`].  Files are staged as temporaries next to
//! their destination and only renamed into place by
//! [`finish`](OutputWriter::finish), so a failed run never leaves a partial
//! file at the final path.  Each file is replaced atomically, but the pair
//! is not: the node table is renamed first, then the graph, so an error on
//! the second rename leaves a new node file beside the old graph file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use og_output::{export, JsonWriter};
//!
//! let mut writer = JsonWriter::new(Path::new("./out"))?;
//! export(&mut writer, &map_graph)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod json;
pub mod writer;

mod staged;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export;
pub use json::JsonWriter;
pub use writer::OutputWriter;
