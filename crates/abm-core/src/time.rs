//! Simulation time model.
//!
//! Time advances in whole epochs.  Each epoch is one pass of the schedule
//! (commit, prologue, main, epilogue); there is no mapping to wall-clock
//! time.  Epoch indices are zero-based, so a run configured for `n` epochs
//! visits `Epoch(0)` through `Epoch(n - 1)`.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Epoch ────────────────────────────────────────────────────────────────────

/// A zero-based epoch index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epoch(pub u64);

impl Epoch {
    pub const ZERO: Epoch = Epoch(0);

    /// The epoch immediately after `self`.
    #[inline]
    pub fn next(self) -> Epoch {
        Epoch(self.0 + 1)
    }

    /// `true` when `self` falls on an `every`-epoch boundary.
    ///
    /// `every == 0` never matches.
    #[inline]
    pub fn is_multiple_of(self, every: u64) -> bool {
        every != 0 && self.0 % every == 0
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a TOML/JSON file (feature `serde`)
/// by the application crate and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of epochs `Sim::run` will execute.  Must be positive.
    pub epochs: u64,

    /// Emit per-epoch progress at `info` level instead of `debug`.
    pub verbose: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Configuration for `epochs` epochs, verbose, seed 0.
    pub fn new(epochs: u64) -> Self {
        Self { epochs, verbose: true, seed: 0 }
    }

    /// The epoch at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_epoch(&self) -> Epoch {
        Epoch(self.epochs)
    }

    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.epochs == 0 {
            return Err(CoreError::Config("epochs must be positive".into()));
        }
        Ok(())
    }
}
