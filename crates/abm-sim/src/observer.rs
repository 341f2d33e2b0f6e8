//! Simulation observer trait for progress reporting and data collection.

use std::time::Duration;

use abm_core::Epoch;

use crate::RunReport;

/// Callbacks invoked by [`Sim::run_with`][crate::Sim::run_with] at epoch
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see timings and counts only;
/// anything that needs the full `Sim` belongs in a `Helper`.
///
/// # Example
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_epoch_end(&mut self, epoch: Epoch, elapsed: Duration, live: usize) {
///         if epoch.is_multiple_of(self.interval) {
///             println!("{epoch}: {live} agents in {elapsed:?}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the epoch's commit.
    fn on_epoch_start(&mut self, _epoch: Epoch) {}

    /// Called after the epilogue.  `live_agents` is the size of the live set
    /// the epoch ran with.
    fn on_epoch_end(&mut self, _epoch: Epoch, _elapsed: Duration, _live_agents: usize) {}

    /// Called once when the run finishes, whether by exhausting the epoch
    /// budget or by an exit request.  Not called if a hook failed.
    fn on_sim_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
