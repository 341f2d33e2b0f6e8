//! `abm-sim`: epoch loop orchestrator for the `abm` framework.
//!
//! # Epoch loop
//!
//! ```text
//! for epoch in 0..config.epochs:
//!   ⓪ Exit     : stop if a hook requested exit last epoch.
//!   ① Commit   : live = (live − to_remove) ∪ to_add; staging cleared.
//!   ② Prologue : helpers (in order), then every live agent.
//!   ③ Main     : helpers, then agents.
//!   ④ Epilogue : helpers, then agents.
//! ```
//!
//! Hooks receive `&mut Sim` and may stage additions and removals, move
//! agents on grids, write output, or request exit.  Staged changes take
//! effect at the next commit.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives for `OutputStore`, plus the `abm-core`/`abm-spatial` types. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use abm_core::{AgentId, SimConfig};
//! use abm_sim::{Agent, Sim, SimBuilder, SimResult, Steppable};
//!
//! struct Walker;
//!
//! impl Steppable<AgentId> for Walker {
//!     fn on_main(&mut self, me: AgentId, sim: &mut Sim) -> SimResult<()> {
//!         let Some(here) = sim.position(me, "world") else { return Ok(()) };
//!         let grid = sim.environments.occupancy("world")?;
//!         if let Some(next) = grid.least_populated_neighbor(here, &mut sim.rng) {
//!             sim.relocate(me, "world", next)?;
//!         }
//!         Ok(())
//!     }
//! }
//! impl Agent for Walker {}
//!
//! let mut sim = SimBuilder::new(SimConfig::new(10)).build()?;
//! sim.run()?;
//! ```

/// Log progress at `info` when the run is verbose, `debug` otherwise.
macro_rules! progress {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            ::tracing::info!($($arg)+)
        } else {
            ::tracing::debug!($($arg)+)
        }
    };
}

pub mod builder;
pub mod error;
pub mod observer;
pub mod placement;
pub mod schedule;
pub mod sim;
pub mod steppable;
pub mod store;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use placement::Positions;
pub use schedule::Schedule;
pub use sim::{RunReport, Sim};
pub use steppable::{Agent, Helper, Phase, Steppable};
pub use store::OutputStore;
