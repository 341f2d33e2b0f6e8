//! Agent placement on occupancy grids.
//!
//! Every agent carries a mirror of where it sits in each occupancy grid it
//! has been placed in.  The mirror lives in [`Positions`] on the `Sim`, not
//! on the agent, so placement works for any `Agent` implementation.  The
//! `Sim` methods below keep grid and mirror in step:
//!
//! | Method           | Grid effect                   | Mirror effect            |
//! |------------------|-------------------------------|--------------------------|
//! | `place`          | add at `coord`                | `Some(coord)`            |
//! | `relocate`       | move old → new                | `Some(new)`              |
//! | `vacate`         | remove (if tracked)           | `None`                   |
//! | `retire`         | vacate every grid             | all `None`, then staged  |
//!
//! Operations that fail leave both untouched.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::debug;

use abm_core::AgentId;
use abm_spatial::Coord;

use crate::{Sim, SimError, SimResult};

/// Per-agent environment → coordinate mirror.
///
/// A `None` entry means the agent was tracked in that environment once and
/// has since been vacated.
#[derive(Clone, Debug, Default)]
pub struct Positions {
    inner: FxHashMap<AgentId, BTreeMap<String, Option<Coord>>>,
}

impl Positions {
    /// Where `agent` currently sits in `environment`.
    pub fn get(&self, agent: AgentId, environment: &str) -> Option<Coord> {
        self.inner.get(&agent)?.get(environment).copied().flatten()
    }

    /// `true` if `environment` has an entry for `agent`, placed or vacated.
    pub fn is_tracked(&self, agent: AgentId, environment: &str) -> bool {
        self.inner
            .get(&agent)
            .is_some_and(|envs| envs.contains_key(environment))
    }

    /// Every environment `agent` has an entry for, in sorted order.
    pub fn environments(&self, agent: AgentId) -> impl Iterator<Item = &str> + '_ {
        self.inner
            .get(&agent)
            .into_iter()
            .flat_map(|envs| envs.keys().map(String::as_str))
    }

    /// Number of agents with at least one entry.
    pub fn tracked_agents(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn record(&mut self, agent: AgentId, environment: &str, coord: Option<Coord>) {
        self.inner
            .entry(agent)
            .or_default()
            .insert(environment.to_owned(), coord);
    }

    pub(crate) fn forget(&mut self, agent: AgentId) {
        self.inner.remove(&agent);
    }
}

impl Sim {
    /// Put `agent` into occupancy grid `environment` at `coord`.
    ///
    /// Returns `Ok(false)` (and logs a warning) if `coord` is out of bounds.
    pub fn place(&mut self, agent: AgentId, environment: &str, coord: Coord) -> SimResult<bool> {
        let grid = self.environments.occupancy_mut(environment)?;
        if !grid.add(agent, coord) {
            return Ok(false);
        }
        self.positions.record(agent, environment, Some(coord));
        Ok(true)
    }

    /// Move `agent` within `environment` from its mirrored position to `to`.
    ///
    /// Returns `Ok(false)` if `to` is out of bounds, and
    /// [`SimError::NotPlaced`] if the agent has no position there.  Moving to
    /// the current cell is a successful no-op.
    pub fn relocate(&mut self, agent: AgentId, environment: &str, to: Coord) -> SimResult<bool> {
        let grid = self.environments.occupancy_mut(environment)?;
        if !grid.valid(to) {
            debug!(%agent, environment, coord = %to, "relocate target out of bounds");
            return Ok(false);
        }
        let from = self.positions.get(agent, environment).ok_or_else(|| SimError::NotPlaced {
            agent,
            environment: environment.to_owned(),
        })?;
        grid.move_agent(agent, from, to)?;
        self.positions.record(agent, environment, Some(to));
        Ok(true)
    }

    /// Take `agent` out of `environment` and clear its mirrored position.
    ///
    /// A no-op on the grid if the agent was not placed there.
    pub fn vacate(&mut self, agent: AgentId, environment: &str) -> SimResult<()> {
        if let Some(coord) = self.positions.get(agent, environment) {
            self.environments.occupancy_mut(environment)?.remove(agent, coord)?;
        }
        self.positions.record(agent, environment, None);
        Ok(())
    }

    /// Vacate every environment `agent` is placed in, then stage it for
    /// removal.  The agent keeps running until the end of the current epoch.
    pub fn retire(&mut self, agent: AgentId) -> SimResult<()> {
        let environments: Vec<String> =
            self.positions.environments(agent).map(str::to_owned).collect();
        for environment in &environments {
            self.vacate(agent, environment)?;
        }
        self.schedule.stage_removal(agent);
        Ok(())
    }

    /// Shorthand for `self.positions.get(agent, environment)`.
    pub fn position(&self, agent: AgentId, environment: &str) -> Option<Coord> {
        self.positions.get(agent, environment)
    }
}
