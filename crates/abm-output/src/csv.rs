//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `epoch_summaries.csv`
//! - `series.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EpochSummaryRow, OutputResult, SeriesRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    series:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("epoch_summaries.csv"))?;
        summaries.write_record(["epoch", "elapsed_micros", "live_agents"])?;

        let mut series = Writer::from_path(dir.join("series.csv"))?;
        series.write_record(["series", "epoch", "value"])?;

        Ok(Self {
            summaries,
            series,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_epoch_summary(&mut self, row: &EpochSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.epoch.to_string(),
            row.elapsed_micros.to_string(),
            row.live_agents.to_string(),
        ])?;
        Ok(())
    }

    fn write_series(&mut self, rows: &[SeriesRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.series.write_record(&[
                row.series.to_owned(),
                row.epoch.to_string(),
                row.value.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.series.flush()?;
        Ok(())
    }
}
