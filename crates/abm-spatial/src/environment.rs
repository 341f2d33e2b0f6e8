//! Named environments and the registry that owns them.

use std::collections::BTreeMap;

use tracing::warn;

use crate::{Extent, OccupancyGrid, ScalarGrid, SpatialError, SpatialResult};

/// One named spatial environment of either kind.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Environment {
    Occupancy(OccupancyGrid),
    Scalar(ScalarGrid),
}

impl Environment {
    pub fn name(&self) -> &str {
        match self {
            Environment::Occupancy(g) => g.name(),
            Environment::Scalar(g) => g.name(),
        }
    }

    pub fn extent(&self) -> Extent {
        match self {
            Environment::Occupancy(g) => g.extent(),
            Environment::Scalar(g) => g.extent(),
        }
    }
}

impl From<OccupancyGrid> for Environment {
    fn from(grid: OccupancyGrid) -> Self {
        Environment::Occupancy(grid)
    }
}

impl From<ScalarGrid> for Environment {
    fn from(grid: ScalarGrid) -> Self {
        Environment::Scalar(grid)
    }
}

/// Name → environment registry owned by the `Sim`.
///
/// Names are not enforced to be unique: registering a second environment
/// under an existing name replaces the first.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environments {
    inner: BTreeMap<String, Environment>,
}

impl Environments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `env` under its own name, returning any environment it
    /// replaced.
    pub fn register(&mut self, env: impl Into<Environment>) -> Option<Environment> {
        let env = env.into();
        let name = env.name().to_owned();
        let previous = self.inner.insert(name, env);
        if let Some(prev) = &previous {
            warn!(name = prev.name(), "environment re-registered, previous one replaced");
        }
        previous
    }

    /// Create and register an empty occupancy grid, returning it for setup.
    pub fn add_occupancy(&mut self, name: &str, extent: Extent) -> SpatialResult<&mut OccupancyGrid> {
        self.register(OccupancyGrid::new(name, extent));
        self.occupancy_mut(name)
    }

    /// Create and register a zero-filled scalar grid, returning it for setup.
    pub fn add_scalar(&mut self, name: &str, extent: Extent) -> SpatialResult<&mut ScalarGrid> {
        self.register(ScalarGrid::new(name, extent));
        self.scalar_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Environment> {
        self.inner.remove(name)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn get(&self, name: &str) -> SpatialResult<&Environment> {
        self.inner
            .get(name)
            .ok_or_else(|| SpatialError::UnknownEnvironment(name.to_owned()))
    }

    pub fn get_mut(&mut self, name: &str) -> SpatialResult<&mut Environment> {
        self.inner
            .get_mut(name)
            .ok_or_else(|| SpatialError::UnknownEnvironment(name.to_owned()))
    }

    pub fn occupancy(&self, name: &str) -> SpatialResult<&OccupancyGrid> {
        match self.get(name)? {
            Environment::Occupancy(g) => Ok(g),
            Environment::Scalar(_) => Err(wrong_kind(name, "an occupancy grid")),
        }
    }

    pub fn occupancy_mut(&mut self, name: &str) -> SpatialResult<&mut OccupancyGrid> {
        match self.get_mut(name)? {
            Environment::Occupancy(g) => Ok(g),
            Environment::Scalar(_) => Err(wrong_kind(name, "an occupancy grid")),
        }
    }

    pub fn scalar(&self, name: &str) -> SpatialResult<&ScalarGrid> {
        match self.get(name)? {
            Environment::Scalar(g) => Ok(g),
            Environment::Occupancy(_) => Err(wrong_kind(name, "a scalar grid")),
        }
    }

    pub fn scalar_mut(&mut self, name: &str) -> SpatialResult<&mut ScalarGrid> {
        match self.get_mut(name)? {
            Environment::Scalar(g) => Ok(g),
            Environment::Occupancy(_) => Err(wrong_kind(name, "a scalar grid")),
        }
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn wrong_kind(name: &str, expected: &'static str) -> SpatialError {
    SpatialError::WrongKind { name: name.to_owned(), expected }
}
