//! `OccupancyGrid`: sparse coordinate → occupant-set index.
//!
//! Occupants are agent handles, so membership is by identity.  Cells with no
//! occupants are not stored; reading one yields an empty set.
//!
//! The grid does not know where else an agent is placed.  Keeping an agent's
//! own record of its position in sync with the grid is the job of the
//! placement helpers in `abm-sim`.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use abm_core::{AgentId, SimRng};

use crate::geometry::{self, first_extremum};
use crate::{Coord, Extent, SpatialError, SpatialResult};

/// A named grid holding a set of agents at each coordinate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    name:   String,
    extent: Extent,
    cells:  FxHashMap<Coord, FxHashSet<AgentId>>,
}

impl OccupancyGrid {
    pub fn new(name: impl Into<String>, extent: Extent) -> Self {
        Self {
            name: name.into(),
            extent,
            cells: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// `true` if `coord` lies inside this grid's extent.
    #[inline]
    pub fn valid(&self, coord: Coord) -> bool {
        geometry::valid(coord, self.extent)
    }

    /// In-bounds neighbors of `coord`; shuffled when `rng` is given.
    pub fn moore_neighborhood(&self, coord: Coord, rng: Option<&mut SimRng>) -> Vec<Coord> {
        geometry::moore_neighborhood(coord, self.extent, rng)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `agent` at `coord`.
    ///
    /// Returns `false` (and logs a warning) if `coord` is out of bounds; the
    /// grid is left unchanged.  Placement elsewhere in the grid is not
    /// checked.
    pub fn add(&mut self, agent: AgentId, coord: Coord) -> bool {
        if !self.valid(coord) {
            warn!(grid = %self.name, %coord, %agent, "invalid position, agent not added");
            return false;
        }
        self.cells.entry(coord).or_default().insert(agent);
        true
    }

    /// Remove `agent` from `coord`.
    ///
    /// Fails with [`SpatialError::MissingOccupant`] if the agent is not
    /// there.
    pub fn remove(&mut self, agent: AgentId, coord: Coord) -> SpatialResult<()> {
        let set = self
            .cells
            .get_mut(&coord)
            .ok_or(SpatialError::MissingOccupant { agent, coord })?;
        if !set.remove(&agent) {
            return Err(SpatialError::MissingOccupant { agent, coord });
        }
        if set.is_empty() {
            self.cells.remove(&coord);
        }
        Ok(())
    }

    /// Move `agent` from `from` to `to`.
    ///
    /// If `to` is out of bounds this is a silent no-op returning `Ok(false)`
    /// and the agent stays at `from`.  Otherwise the agent must be present at
    /// `from` or the call fails with [`SpatialError::MissingOccupant`].
    pub fn move_agent(&mut self, agent: AgentId, from: Coord, to: Coord) -> SpatialResult<bool> {
        if !self.valid(to) {
            return Ok(false);
        }
        self.remove(agent, from)?;
        self.cells.entry(to).or_default().insert(agent);
        Ok(true)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Agents at `coord`, in unspecified order.
    pub fn occupants(&self, coord: Coord) -> impl Iterator<Item = AgentId> + '_ {
        self.cells.get(&coord).into_iter().flatten().copied()
    }

    /// Number of agents at `coord`.
    #[inline]
    pub fn population(&self, coord: Coord) -> usize {
        self.cells.get(&coord).map_or(0, FxHashSet::len)
    }

    /// `true` if `agent` is an occupant of `coord`.
    pub fn contains(&self, agent: AgentId, coord: Coord) -> bool {
        self.cells.get(&coord).is_some_and(|set| set.contains(&agent))
    }

    /// Every non-empty cell with its occupants.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, &FxHashSet<AgentId>)> + '_ {
        self.cells.iter().map(|(&c, set)| (c, set))
    }

    /// Sum of occupant counts over all cells.
    pub fn total_population(&self) -> usize {
        self.cells.values().map(FxHashSet::len).sum()
    }

    /// The neighbor of `coord` holding the most agents.
    ///
    /// The neighborhood is shuffled before the scan, so ties resolve to a
    /// random one of the tied cells.  `None` if `coord` has no in-bounds
    /// neighbors.
    pub fn most_populated_neighbor(&self, coord: Coord, rng: &mut SimRng) -> Option<Coord> {
        let neigh = self.moore_neighborhood(coord, Some(rng));
        first_extremum(&neigh, |c| self.population(c), |a, b| a > b)
    }

    /// The neighbor of `coord` holding the fewest agents.
    ///
    /// Tie-breaking and the `None` case are as for
    /// [`most_populated_neighbor`](Self::most_populated_neighbor).
    pub fn least_populated_neighbor(&self, coord: Coord, rng: &mut SimRng) -> Option<Coord> {
        let neigh = self.moore_neighborhood(coord, Some(rng));
        first_extremum(&neigh, |c| self.population(c), |a, b| a < b)
    }
}
