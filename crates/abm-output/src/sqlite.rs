//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `epoch_summaries` and `series`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EpochSummaryRow, OutputResult, SeriesRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS epoch_summaries (
                 epoch          INTEGER PRIMARY KEY,
                 elapsed_micros INTEGER NOT NULL,
                 live_agents    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS series (
                 series TEXT    NOT NULL,
                 epoch  INTEGER NOT NULL,
                 value  REAL    NOT NULL,
                 PRIMARY KEY (series, epoch)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_epoch_summary(&mut self, row: &EpochSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO epoch_summaries (epoch, elapsed_micros, live_agents) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.epoch as i64, row.elapsed_micros as i64, row.live_agents as i64],
        )?;
        Ok(())
    }

    fn write_series(&mut self, rows: &[SeriesRow<'_>]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO series (series, epoch, value) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.series, row.epoch as i64, row.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
