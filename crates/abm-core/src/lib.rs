//! `abm-core`: foundational types for the `abm` epoch-scheduling framework.
//!
//! This crate is a dependency of every other `abm-*` crate.  It has no
//! `abm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `HelperId`                                 |
//! | [`time`]        | `Epoch`, `SimConfig`                                  |
//! | [`rng`]         | `SimRng` (seeded, shared by the whole run)            |
//! | [`properties`]  | `PropertyBag`: open key → value store                |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod properties;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, HelperId};
pub use properties::PropertyBag;
pub use rng::SimRng;
pub use time::{Epoch, SimConfig};
