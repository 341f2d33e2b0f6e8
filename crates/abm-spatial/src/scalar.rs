//! `ScalarGrid`: sparse coordinate → `f64` field.
//!
//! Unset coordinates read as `0.0`, and writing `0.0` drops the entry, so
//! only non-zero cells are ever stored.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::geometry::{self, first_extremum};
use crate::{Coord, Extent};

/// A named grid holding one number per coordinate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarGrid {
    name:   String,
    extent: Extent,
    values: FxHashMap<Coord, f64>,
}

impl ScalarGrid {
    pub fn new(name: impl Into<String>, extent: Extent) -> Self {
        Self {
            name: name.into(),
            extent,
            values: FxHashMap::default(),
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

    #[inline]
    pub fn valid(&self, coord: Coord) -> bool {
        geometry::valid(coord, self.extent)
    }

    /// Unshuffled in-bounds neighbors of `coord`.
    pub fn moore_neighborhood(&self, coord: Coord) -> Vec<Coord> {
        geometry::moore_neighborhood(coord, self.extent, None)
    }

    // ── Values ────────────────────────────────────────────────────────────

    /// The value at `coord` (`0.0` if never set).
    #[inline]
    pub fn get(&self, coord: Coord) -> f64 {
        self.values.get(&coord).copied().unwrap_or(0.0)
    }

    /// Overwrite the value at `coord`.
    ///
    /// Returns `false` (and logs a warning) if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, value: f64) -> bool {
        if !self.valid(coord) {
            warn!(grid = %self.name, %coord, "invalid position, value not set");
            return false;
        }
        if value == 0.0 {
            self.values.remove(&coord);
        } else {
            self.values.insert(coord, value);
        }
        true
    }

    /// Add `delta` to the value at `coord`; same bounds rule as [`set`](Self::set).
    pub fn add(&mut self, coord: Coord, delta: f64) -> bool {
        let current = self.get(coord);
        self.set(coord, current + delta)
    }

    /// Every stored (non-zero) cell, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (Coord, f64)> + '_ {
        self.values.iter().map(|(&c, &v)| (c, v))
    }

    /// Sum over all cells.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    // ── Neighbor search ───────────────────────────────────────────────────

    /// The neighbor of `coord` with the largest value.
    ///
    /// The neighborhood is scanned in its fixed generation order, so ties go
    /// to the earliest tied neighbor.  `None` if `coord` has no in-bounds
    /// neighbors.
    pub fn max_in_neighborhood(&self, coord: Coord) -> Option<Coord> {
        let neigh = self.moore_neighborhood(coord);
        first_extremum(&neigh, |c| self.get(c), |a, b| a > b)
    }

    /// The neighbor of `coord` with the smallest value; see
    /// [`max_in_neighborhood`](Self::max_in_neighborhood).
    pub fn min_in_neighborhood(&self, coord: Coord) -> Option<Coord> {
        let neigh = self.moore_neighborhood(coord);
        first_extremum(&neigh, |c| self.get(c), |a, b| a < b)
    }
}
