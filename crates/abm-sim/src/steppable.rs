//! The phase-hook contract shared by agents and helpers.

use abm_core::{AgentId, HelperId};

use crate::{Sim, SimResult};

/// One of the three ordered phases of an epoch.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Observe shared state.
    Prologue,
    /// Act on it.
    Main,
    /// Record and react to the results of every main-phase action.
    Epilogue,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 3] = [Phase::Prologue, Phase::Main, Phase::Epilogue];
}

/// Something the schedule steps once per phase per epoch.
///
/// `Id` is the handle the schedule passes back so an implementation can
/// refer to itself (e.g. to move itself on a grid or to retire).  Every hook
/// defaults to a no-op, so implementors override only the phases they use.
///
/// Hooks get exclusive access to the whole [`Sim`].  While a hook runs, its
/// own entity is checked out of the schedule: `sim.schedule.agent(me)`
/// returns `None` inside an agent's own hook.
///
/// An `Err` from any hook aborts the epoch and is returned from `Sim::run`.
///
/// # Example
///
/// ```rust,ignore
/// struct Counter { n: u32 }
///
/// impl Steppable<AgentId> for Counter {
///     fn on_main(&mut self, _me: AgentId, _sim: &mut Sim) -> SimResult<()> {
///         self.n += 1;
///         Ok(())
///     }
/// }
/// impl Agent for Counter {}
/// ```
pub trait Steppable<Id: Copy> {
    fn on_prologue(&mut self, _me: Id, _sim: &mut Sim) -> SimResult<()> {
        Ok(())
    }

    fn on_main(&mut self, _me: Id, _sim: &mut Sim) -> SimResult<()> {
        Ok(())
    }

    fn on_epilogue(&mut self, _me: Id, _sim: &mut Sim) -> SimResult<()> {
        Ok(())
    }
}

/// Run the hook for `phase`.
pub(crate) fn step_phase<Id: Copy, S: Steppable<Id> + ?Sized>(
    stepper: &mut S,
    phase:   Phase,
    me:      Id,
    sim:     &mut Sim,
) -> SimResult<()> {
    match phase {
        Phase::Prologue => stepper.on_prologue(me, sim),
        Phase::Main => stepper.on_main(me, sim),
        Phase::Epilogue => stepper.on_epilogue(me, sim),
    }
}

/// An autonomous entity with identity, scheduled through the live-agent set.
pub trait Agent: Steppable<AgentId> + 'static {
    /// Label used when summarising the population (default: the type name).
    fn kind(&self) -> &str {
        short_type_name::<Self>()
    }
}

/// A model-level entity stepped before all agents in every phase, in
/// registration order.
pub trait Helper: Steppable<HelperId> + 'static {
    fn kind(&self) -> &str {
        short_type_name::<Self>()
    }
}

/// `std::any::type_name` without the module path.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
