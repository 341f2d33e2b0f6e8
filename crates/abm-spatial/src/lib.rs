//! `abm-spatial`: bounded integer grids that agents and helpers share.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`coord`]       | `Coord` (2D/3D integer coordinate), `Extent` (grid bounds)  |
//! | [`geometry`]    | `valid`, `moore_neighborhood`: the shared pure primitives  |
//! | [`occupancy`]   | `OccupancyGrid`: coordinate → set of `AgentId`             |
//! | [`scalar`]      | `ScalarGrid`: coordinate → `f64`                           |
//! | [`environment`] | `Environment` (either grid kind), `Environments` registry   |
//! | [`error`]       | `SpatialError`, `SpatialResult<T>`                          |
//!
//! Both grid kinds are sparse: a coordinate missing from the map reads as an
//! empty occupant set or as `0.0`.  Dimensionality is carried by the
//! [`Extent`] each grid embeds, so a 2D grid simply treats every 3D
//! coordinate as out of bounds.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod coord;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod occupancy;
pub mod scalar;


pub use coord::{Coord, Extent};
pub use environment::{Environment, Environments};
pub use error::{SpatialError, SpatialResult};
pub use geometry::{moore_neighborhood, valid};
pub use occupancy::OccupancyGrid;
pub use scalar::ScalarGrid;
