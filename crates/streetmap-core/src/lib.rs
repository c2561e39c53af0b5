//! `streetmap-core` — identifiers and geographic primitives.
//!
//! This crate is a dependency of every other `streetmap-*` crate. It
//! intentionally has no `streetmap-*` dependencies and no required external
//! ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                                  |
//! |---------|--------------------------------------------|
//! | [`ids`] | `PointId`, `SegmentId`                     |
//! | [`geo`] | `GeoPoint`, haversine distance             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

pub use geo::GeoPoint;
pub use ids::{PointId, SegmentId};
