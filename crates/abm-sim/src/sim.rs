//! The `Sim` struct and its epoch loop.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use abm_core::{Epoch, PropertyBag, SimConfig, SimRng};
use abm_spatial::Environments;

use crate::{NoopObserver, OutputStore, Positions, Schedule, SimBuilder, SimObserver, SimResult};

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Timing summary returned by [`Sim::run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    /// Epochs that actually executed.
    pub epochs_run: u64,

    /// `Some(epoch)` if an exit request ended the run before the configured
    /// epoch count was reached; `epoch` is the last one that executed.
    pub stopped_at: Option<Epoch>,

    /// Wall time of each executed epoch, in order.
    pub epoch_times: Vec<Duration>,

    /// Sum of `epoch_times`.
    pub total: Duration,
}

impl RunReport {
    pub fn stopped_early(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Mean wall time per executed epoch.
    pub fn mean_epoch_time(&self) -> Duration {
        match self.epoch_times.len() {
            0 => Duration::ZERO,
            n => self.total / n as u32,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver and the model state every hook sees.
///
/// `Sim` drives the epoch loop:
///
/// 1. **Exit check**: if a hook requested exit during the previous epoch,
///    stop before starting another.
/// 2. **Commit**: staged additions and removals take effect.
/// 3. **Prologue**, **main**, **epilogue**: helpers first, in registration
///    order, then every live agent.
///
/// All fields except the exit flag are public so hooks can reach the grids,
/// properties and output directly through the `&mut Sim` they receive.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Epoch count, verbosity, seed.
    pub config: SimConfig,

    /// The epoch being (or last) executed.  Zero before the first run.
    pub current_epoch: Epoch,

    /// Live agents, staging sets and helpers.
    pub schedule: Schedule,

    /// Named occupancy and scalar grids.
    pub environments: Environments,

    /// Model-wide parameters and shared state.
    pub properties: PropertyBag,

    /// Time series written by helpers.
    pub output: OutputStore,

    /// Where each agent sits in each occupancy grid.
    pub positions: Positions,

    /// Seeded from `config.seed`; use for every randomised decision.
    pub rng: SimRng,

    exit: bool,
}

impl Sim {
    /// A `Sim` with no agents, helpers or environments.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        SimBuilder::new(config).build()
    }

    pub(crate) fn from_parts(
        config:       SimConfig,
        schedule:     Schedule,
        environments: Environments,
        properties:   PropertyBag,
    ) -> Self {
        Self {
            rng: SimRng::new(config.seed),
            config,
            current_epoch: Epoch::ZERO,
            schedule,
            environments,
            properties,
            output: OutputStore::new(),
            positions: Positions::default(),
            exit: false,
        }
    }

    // ── Exit flag ─────────────────────────────────────────────────────────

    /// Ask the run to stop once the current epoch completes.
    ///
    /// The remaining phases of the current epoch still run.
    pub fn request_exit(&mut self) {
        self.exit = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run epochs `0..config.epochs`, stopping early on an exit request.
    pub fn run(&mut self) -> SimResult<RunReport> {
        self.run_with(&mut NoopObserver)
    }

    /// [`run`](Self::run) with observer callbacks at every epoch boundary.
    ///
    /// Each run starts with the exit flag cleared, so an exit requested by an
    /// earlier run does not carry over.  The first hook error aborts the run
    /// and is returned as-is; the epoch it occurred in is left partially
    /// applied.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        let verbose = self.config.verbose;
        let mut report = RunReport::default();
        if std::mem::take(&mut self.exit) {
            debug!("clearing exit request left over from before the run");
        }

        let mut last_run = None;
        for index in 0..self.config.epochs {
            if self.exit {
                info!(epoch = ?last_run, "exit requested, stopping early");
                report.stopped_at = last_run;
                break;
            }

            let epoch = Epoch(index);
            self.current_epoch = epoch;
            observer.on_epoch_start(epoch);

            let started = Instant::now();
            self.step()?;
            let elapsed = started.elapsed();

            progress!(verbose, %epoch, ?elapsed, live = self.schedule.live_count(), "epoch complete");
            observer.on_epoch_end(epoch, elapsed, self.schedule.live_count());
            report.epoch_times.push(elapsed);
            last_run = Some(epoch);
        }

        report.epochs_run = report.epoch_times.len() as u64;
        report.total = report.epoch_times.iter().sum();
        progress!(verbose, epochs = report.epochs_run, total = ?report.total, "run complete");
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Execute exactly one epoch at `current_epoch`, ignoring the exit flag
    /// and the configured epoch count.
    ///
    /// Useful for tests and incremental stepping.
    pub fn step(&mut self) -> SimResult<()> {
        Schedule::step_schedule(self)
    }
}
