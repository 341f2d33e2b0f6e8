//! `AgentSummary`: per-kind population counts recorded into the run's
//! `OutputStore`.

use std::collections::{BTreeMap, BTreeSet};

use abm_core::HelperId;
use abm_sim::{Helper, Sim, SimResult, Steppable};

/// Helper that counts agents by [`Agent::kind`](abm_sim::Agent::kind) in
/// the epilogue and records one `"{prefix}{kind}"` sample per kind.
///
/// The population counted is the live set plus any agents staged for
/// addition, i.e. everyone who will run next epoch or is running now.  A
/// kind seen once keeps being recorded, with `0` once it dies out, so its
/// series has no gaps.
#[derive(Debug, Clone)]
pub struct AgentSummary {
    every:  u64,
    prefix: String,
    seen:   BTreeSet<String>,
}

impl AgentSummary {
    /// Record every epoch, with series names prefixed `"agents."`.
    pub fn new() -> Self {
        Self {
            every:  1,
            prefix: "agents.".to_owned(),
            seen:   BTreeSet::new(),
        }
    }

    /// Record only on epochs that are multiples of `every` (`0` disables).
    pub fn record_every(mut self, every: u64) -> Self {
        self.every = every;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The series name used for `kind`.
    pub fn series_name(&self, kind: &str) -> String {
        format!("{}{}", self.prefix, kind)
    }

    /// Count the current population of `sim` by kind.
    pub fn count(sim: &Sim) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        let ids = sim.schedule.live().chain(sim.schedule.staged_additions());
        for id in ids {
            if let Some(agent) = sim.schedule.agent(id) {
                *counts.entry(agent.kind().to_owned()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Default for AgentSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl Steppable<HelperId> for AgentSummary {
    fn on_epilogue(&mut self, _me: HelperId, sim: &mut Sim) -> SimResult<()> {
        if !sim.current_epoch.is_multiple_of(self.every) {
            return Ok(());
        }
        let counts = Self::count(sim);
        self.seen.extend(counts.keys().cloned());
        let epoch = sim.current_epoch;
        for kind in &self.seen {
            let n = counts.get(kind).copied().unwrap_or(0);
            sim.output.record(&self.series_name(kind), epoch, n as f64);
        }
        Ok(())
    }
}

impl Helper for AgentSummary {}
