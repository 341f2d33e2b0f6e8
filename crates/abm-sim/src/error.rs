use abm_core::{AgentId, CoreError};
use abm_spatial::SpatialError;
use thiserror::Error;

/// Errors that abort an epoch and propagate out of `Sim::run`.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("{agent} has no recorded position in `{environment}`")]
    NotPlaced {
        agent:       AgentId,
        environment: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
