//! `streetmap-graph` — the street-map graph, adjacency, validation, and
//! shortest-time routing engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-------------------------------------------------------------|
//! | [`map`]       | `Map`, `MapBuilder`, `Point`, `Segment`, `Directionality`  |
//! | [`adjacency`] | The shared `step` relation: `out_steps`, `connects`, `shared_segments`, `consecutive_ignoring_direction` |
//! | [`pqueue`]    | `PriorityQueue`                                            |
//! | [`validator`] | `PathValidator`, `ValidationError`                         |
//! | [`router`]    | `Router` trait, `ShortestTimeRouter`, `RouteError`          |
//! | [`query`]     | `MapQuery` façade                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.      |

pub mod adjacency;
pub mod map;
pub mod pqueue;
pub mod query;
pub mod router;
pub mod validator;


pub use map::{BuildError, Directionality, Map, MapBuilder, Point, Segment};
pub use pqueue::PriorityQueue;
pub use query::MapQuery;
pub use router::{Route, RouteError, Router, ShortestTimeRouter};
pub use validator::{PathValidator, ValidationError};

pub use streetmap_core::{GeoPoint, PointId, SegmentId};
