//! `Schedule`: the live-agent set, its staging sets, and phase execution.
//!
//! # Epoch commit
//!
//! Agents never join or leave the live set mid-epoch.  Additions and
//! removals are staged and merged at the start of the next
//! [`Schedule::step_schedule`]:
//!
//! ```text
//! live = (live − to_remove) ∪ to_add
//! ```
//!
//! An agent staged for addition during setup (or during epoch N−1) therefore
//! runs all three phases of the epoch that performs the commit, and an agent
//! that retires mid-epoch still finishes that epoch.
//!
//! # Storage
//!
//! Agents live in an arena indexed by `AgentId`.  Handles are never reused;
//! when a removal is committed the agent is dropped and its slot stays empty.

use rustc_hash::FxHashSet;

use abm_core::{AgentId, HelperId};

use crate::steppable::step_phase;
use crate::{Agent, Helper, Phase, Sim, SimResult};

#[derive(Default)]
pub struct Schedule {
    /// Arena of agents, indexed by `AgentId`.  `None` once dropped, or while
    /// the agent is checked out to run one of its own hooks.
    agents:    Vec<Option<Box<dyn Agent>>>,
    live:      FxHashSet<AgentId>,
    to_add:    FxHashSet<AgentId>,
    to_remove: FxHashSet<AgentId>,
    /// Stepped in this order every phase, before any agent.
    helpers:   Vec<Option<Box<dyn Helper>>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Store `agent` and stage it for addition at the next commit.
    pub fn add_agent<A: Agent>(&mut self, agent: A) -> AgentId {
        self.add_boxed(Box::new(agent))
    }

    /// [`add_agent`](Self::add_agent) for an already boxed agent.
    pub fn add_boxed(&mut self, agent: Box<dyn Agent>) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(Some(agent));
        self.to_add.insert(id);
        id
    }

    /// Stage `agent` for removal at the next commit.
    ///
    /// Prefer `Sim::retire`, which also takes the agent off every grid it
    /// occupies.
    pub fn stage_removal(&mut self, agent: AgentId) {
        self.to_remove.insert(agent);
    }

    /// Append `helper` to the ordered helper list.
    ///
    /// A helper added while a phase is running is stepped later in that same
    /// phase, after every helper ahead of it.
    pub fn add_helper<H: Helper>(&mut self, helper: H) -> HelperId {
        self.add_boxed_helper(Box::new(helper))
    }

    pub fn add_boxed_helper(&mut self, helper: Box<dyn Helper>) -> HelperId {
        let id = HelperId(self.helpers.len() as u32);
        self.helpers.push(Some(helper));
        id
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Live agents in unspecified order.
    pub fn live(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.live.iter().copied()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, agent: AgentId) -> bool {
        self.live.contains(&agent)
    }

    /// Agents that will join the live set at the next commit.
    pub fn staged_additions(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.to_add.iter().copied()
    }

    /// Agents that will leave the live set at the next commit.
    pub fn staged_removals(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.to_remove.iter().copied()
    }

    pub fn staged_addition_count(&self) -> usize {
        self.to_add.len()
    }

    pub fn staged_removal_count(&self) -> usize {
        self.to_remove.len()
    }

    pub fn helper_count(&self) -> usize {
        self.helpers.len()
    }

    /// The agent behind `id`, unless it was dropped or is currently running
    /// one of its own hooks.
    pub fn agent(&self, id: AgentId) -> Option<&dyn Agent> {
        self.agents.get(id.index())?.as_deref()
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut (dyn Agent + 'static)> {
        self.agents.get_mut(id.index())?.as_deref_mut()
    }

    pub fn helper(&self, id: HelperId) -> Option<&dyn Helper> {
        self.helpers.get(id.index())?.as_deref()
    }

    // ── Epoch processing ──────────────────────────────────────────────────

    /// Merge the staging sets into the live set and clear them.
    ///
    /// Returns the agents that left the schedule; their arena slots have
    /// been freed.
    pub fn commit(&mut self) -> Vec<AgentId> {
        let removed: Vec<AgentId> = self.to_remove.drain().collect();
        for id in &removed {
            self.live.remove(id);
        }
        self.live.extend(self.to_add.drain());

        let mut dropped = Vec::with_capacity(removed.len());
        for id in removed {
            if self.live.contains(&id) {
                continue;
            }
            if let Some(slot) = self.agents.get_mut(id.index()) {
                *slot = None;
            }
            dropped.push(id);
        }
        dropped
    }

    /// Run one epoch: commit staged changes, then the prologue, main and
    /// epilogue phases.  Within each phase every helper runs (in list
    /// order) before any live agent.
    ///
    /// This is an associated function rather than a method because hooks
    /// need `&mut Sim`, which owns the schedule.
    pub fn step_schedule(sim: &mut Sim) -> SimResult<()> {
        for agent in sim.schedule.commit() {
            sim.positions.forget(agent);
        }

        // The live set cannot change until the next commit, so one snapshot
        // serves all three phases.
        let live: Vec<AgentId> = sim.schedule.live().collect();
        progress!(sim.config.verbose, epoch = %sim.current_epoch, agents = live.len(), "stepping agents");

        for phase in Phase::ALL {
            Self::step_helpers(sim, phase)?;
            Self::step_agents(sim, phase, &live)?;
        }
        Ok(())
    }

    fn step_helpers(sim: &mut Sim, phase: Phase) -> SimResult<()> {
        let mut index = 0;
        while index < sim.schedule.helpers.len() {
            if let Some(mut helper) = sim.schedule.helpers.get_mut(index).and_then(Option::take) {
                let result = step_phase(helper.as_mut(), phase, HelperId(index as u32), sim);
                if let Some(slot) = sim.schedule.helpers.get_mut(index) {
                    *slot = Some(helper);
                }
                result?;
            }
            index += 1;
        }
        Ok(())
    }

    fn step_agents(sim: &mut Sim, phase: Phase, live: &[AgentId]) -> SimResult<()> {
        for &id in live {
            let Some(mut agent) = sim.schedule.agents.get_mut(id.index()).and_then(Option::take) else {
                continue;
            };
            let result = step_phase(agent.as_mut(), phase, id, sim);
            if let Some(slot) = sim.schedule.agents.get_mut(id.index()) {
                *slot = Some(agent);
            }
            result?;
        }
        Ok(())
    }
}
