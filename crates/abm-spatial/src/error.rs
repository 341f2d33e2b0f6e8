//! Spatial-subsystem error type.

use thiserror::Error;

use abm_core::AgentId;

use crate::Coord;

/// Errors produced by `abm-spatial`.
///
/// Out-of-bounds coordinates are not errors: they are logged and the
/// operation becomes a no-op.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("{agent} is not an occupant of {coord}")]
    MissingOccupant { agent: AgentId, coord: Coord },

    #[error("no environment named `{0}`")]
    UnknownEnvironment(String),

    #[error("environment `{name}` is not {expected}")]
    WrongKind { name: String, expected: &'static str },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
