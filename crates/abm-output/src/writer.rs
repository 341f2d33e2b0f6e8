//! The `OutputWriter` trait implemented by all backend writers.

use abm_sim::OutputStore;

use crate::{EpochSummaryRow, OutputResult, SeriesRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write one epoch summary row.
    fn write_epoch_summary(&mut self, row: &EpochSummaryRow) -> OutputResult<()>;

    /// Write a batch of series samples.
    fn write_series(&mut self, rows: &[SeriesRow<'_>]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every sample in `store` to `writer` as one batch, ordered by series
/// then epoch.  Returns the number of rows written.
pub fn write_output_store<W: OutputWriter + ?Sized>(
    store:  &OutputStore,
    writer: &mut W,
) -> OutputResult<usize> {
    let rows: Vec<SeriesRow<'_>> = store
        .rows()
        .map(|(series, epoch, value)| SeriesRow { series, epoch: epoch.0, value })
        .collect();
    if !rows.is_empty() {
        writer.write_series(&rows)?;
    }
    Ok(rows.len())
}
