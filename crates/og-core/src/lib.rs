//! `og-core` — foundational types for the `osm_graph` workspace.
//!
//! This crate is a dependency of every other `og-*` crate.  It has no `og-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId` (opaque OSM identifier)                      |
//! | [`geo`]         | `Coordinate`, `DistanceUnit`, haversine distance      |
//! | [`config`]      | `BuildConfig`, `DuplicatePolicy`                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                          |
//! |---------|---------------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. Required by `og-output`.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildConfig, DuplicatePolicy};
pub use error::{CoreError, CoreResult};
pub use geo::{haversine, Coordinate, DistanceUnit};
pub use ids::NodeId;
