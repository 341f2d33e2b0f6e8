//! `abm-output`: population summaries and output writers for the `abm`
//! framework.
//!
//! [`AgentSummary`] is a helper that counts agents by kind into the run's
//! `OutputStore`.  Two backends export results, behind Cargo features:
//!
//! | Feature   | Backend | Files created                          |
//! |-----------|---------|----------------------------------------|
//! | *(none)*  | CSV     | `epoch_summaries.csv`, `series.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                            |
//!
//! Both implement [`OutputWriter`].  [`SimOutputObserver`] implements
//! `abm_sim::SimObserver` and writes one timing row per epoch; after the run
//! its [`finish`](SimOutputObserver::finish) exports the `OutputStore` and
//! closes the writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use abm_output::{AgentSummary, CsvWriter, SimOutputObserver};
//!
//! let mut sim = SimBuilder::new(config).helper(AgentSummary::new()).build()?;
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_with(&mut obs)?;
//! obs.finish(&sim.output)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EpochSummaryRow, SeriesRow};
pub use summary::AgentSummary;
pub use writer::{OutputWriter, write_output_store};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
