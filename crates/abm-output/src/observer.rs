//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use std::time::Duration;

use tracing::debug;

use abm_core::Epoch;
use abm_sim::{OutputStore, RunReport, SimObserver};

use crate::row::EpochSummaryRow;
use crate::writer::{OutputWriter, write_output_store};
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one [`EpochSummaryRow`] per executed epoch
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, call [`finish`](Self::finish) to
/// export the sim's `OutputStore` and surface the first stored error, or
/// check manually with [`take_error`](Self::take_error).
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    summary_rows: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            summary_rows: 0,
            last_error:   None,
        }
    }

    /// Number of epoch summary rows written so far.
    pub fn summary_rows(&self) -> usize {
        self.summary_rows
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Export `store`, close the writer and hand it back.
    ///
    /// Fails with the first error stored during the run, if any, before
    /// writing anything else.
    pub fn finish(mut self, store: &OutputStore) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        let rows = write_output_store(store, &mut self.writer)?;
        self.writer.finish()?;
        debug!(summary_rows = self.summary_rows, series_rows = rows, "output finished");
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_epoch_end(&mut self, epoch: Epoch, elapsed: Duration, live_agents: usize) {
        let row = EpochSummaryRow {
            epoch:          epoch.0,
            elapsed_micros: elapsed.as_micros() as u64,
            live_agents:    live_agents as u64,
        };
        let result = self.writer.write_epoch_summary(&row);
        if result.is_ok() {
            self.summary_rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, report: &RunReport) {
        debug!(
            epochs = report.epochs_run,
            rows = self.summary_rows,
            "run ended, epoch summaries written"
        );
    }
}
