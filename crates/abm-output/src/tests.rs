//! Integration tests for abm-output.

#[cfg(test)]
mod agents {
    use abm_core::AgentId;
    use abm_sim::{Agent, Sim, SimResult, Steppable};

    pub struct Sheep;

    impl Steppable<AgentId> for Sheep {}
    impl Agent for Sheep {}

    /// Retires itself during the main phase of epoch 0.
    pub struct Wolf;

    impl Steppable<AgentId> for Wolf {
        fn on_main(&mut self, me: AgentId, sim: &mut Sim) -> SimResult<()> {
            if sim.current_epoch.0 == 0 {
                sim.retire(me)?;
            }
            Ok(())
        }
    }

    impl Agent for Wolf {}

    /// Adds one `Sheep` every main phase.
    pub struct Shepherd;

    impl Steppable<AgentId> for Shepherd {
        fn on_main(&mut self, _me: AgentId, sim: &mut Sim) -> SimResult<()> {
            sim.schedule.add_agent(Sheep);
            Ok(())
        }
    }

    impl Agent for Shepherd {
        fn kind(&self) -> &str {
            "shepherd"
        }
    }
}

// ── AgentSummary ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use abm_core::{Epoch, SimConfig};
    use abm_sim::SimBuilder;

    use super::agents::{Sheep, Shepherd, Wolf};
    use crate::AgentSummary;

    #[test]
    fn counts_by_kind() {
        let mut sim = SimBuilder::new(SimConfig::new(1))
            .agent(Sheep)
            .agent(Sheep)
            .agent(Wolf)
            .helper(AgentSummary::new())
            .build()
            .unwrap();
        sim.run().unwrap();
        assert_eq!(sim.output.value("agents.Sheep", Epoch(0)), Some(2.0));
        assert_eq!(sim.output.value("agents.Wolf", Epoch(0)), Some(1.0));
    }

    #[test]
    fn staged_additions_are_counted() {
        let mut sim = SimBuilder::new(SimConfig::new(2))
            .agent(Shepherd)
            .helper(AgentSummary::new())
            .build()
            .unwrap();
        sim.run().unwrap();
        // One sheep staged in epoch 0, a second in epoch 1.
        assert_eq!(sim.output.value("agents.Sheep", Epoch(0)), Some(1.0));
        assert_eq!(sim.output.value("agents.Sheep", Epoch(1)), Some(2.0));
        assert_eq!(sim.output.value("agents.shepherd", Epoch(1)), Some(1.0));
    }

    #[test]
    fn extinct_kind_records_zero() {
        let mut sim = SimBuilder::new(SimConfig::new(3))
            .agent(Wolf)
            .agent(Sheep)
            .helper(AgentSummary::new())
            .build()
            .unwrap();
        sim.run().unwrap();
        let wolves: Vec<f64> = sim.output.series("agents.Wolf").unwrap().values().copied().collect();
        // Retired in epoch 0, but still live until the next commit.
        assert_eq!(wolves, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn record_every_and_prefix() {
        let mut sim = SimBuilder::new(SimConfig::new(5))
            .agent(Sheep)
            .helper(AgentSummary::new().record_every(2).prefix("n_"))
            .build()
            .unwrap();
        sim.run().unwrap();
        let epochs: Vec<Epoch> = sim.output.series("n_Sheep").unwrap().keys().copied().collect();
        assert_eq!(epochs, vec![Epoch(0), Epoch(2), Epoch(4)]);
        assert!(sim.output.series("agents.Sheep").is_none());
    }

    #[test]
    fn zero_interval_never_records() {
        let mut sim = SimBuilder::new(SimConfig::new(3))
            .agent(Sheep)
            .helper(AgentSummary::new().record_every(0))
            .build()
            .unwrap();
        sim.run().unwrap();
        assert!(sim.output.is_empty());
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use abm_core::{Epoch, SimConfig};
    use abm_sim::{OutputStore, SimBuilder};
    use tempfile::TempDir;

    use super::agents::Sheep;
    use crate::csv::CsvWriter;
    use crate::row::{EpochSummaryRow, SeriesRow};
    use crate::writer::{OutputWriter, write_output_store};
    use crate::{AgentSummary, SimOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("epoch_summaries.csv").exists());
        assert!(dir.path().join("series.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("epoch_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["epoch", "elapsed_micros", "live_agents"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("series.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["series", "epoch", "value"]);
    }

    #[test]
    fn csv_epoch_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_epoch_summary(&EpochSummaryRow { epoch: 3, elapsed_micros: 1_250, live_agents: 40 })
            .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "epoch_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "1250");
        assert_eq!(&rows[0][2], "40");
    }

    #[test]
    fn csv_series_written_in_store_order() {
        let mut store = OutputStore::new();
        store.record("wolves", Epoch(1), 2.5);
        store.record("sheep", Epoch(0), 10.0);
        store.record("wolves", Epoch(0), 3.0);

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        assert_eq!(write_output_store(&store, &mut w).unwrap(), 3);
        w.finish().unwrap();

        let rows = read_rows(&dir, "series.csv");
        let parsed: Vec<(String, u64, f64)> = rows
            .iter()
            .map(|r| (r[0].to_owned(), r[1].parse().unwrap(), r[2].parse().unwrap()))
            .collect();
        assert_eq!(
            parsed,
            vec![
                ("sheep".to_owned(), 0, 10.0),
                ("wolves".to_owned(), 0, 3.0),
                ("wolves".to_owned(), 1, 2.5),
            ]
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_series_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_series(&[] as &[SeriesRow<'_>]).unwrap();
        assert_eq!(write_output_store(&OutputStore::new(), &mut w).unwrap(), 0);
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig { verbose: false, ..SimConfig::new(4) };
        let mut sim = SimBuilder::new(config)
            .agent(Sheep)
            .agent(Sheep)
            .helper(AgentSummary::new())
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run_with(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.summary_rows(), 4);
        obs.finish(&sim.output).unwrap();

        let summaries = read_rows(&dir, "epoch_summaries.csv");
        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().all(|r| &r[2] == "2"));

        let series = read_rows(&dir, "series.csv");
        assert_eq!(series.len(), 4, "one agents.Sheep sample per epoch");
        assert!(series.iter().all(|r| &r[0] == "agents.Sheep"));
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use abm_core::Epoch;
    use abm_sim::OutputStore;
    use tempfile::TempDir;

    use crate::row::{EpochSummaryRow, SeriesRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::{OutputWriter, write_output_store};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_epoch_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_epoch_summary(&EpochSummaryRow { epoch: 7, elapsed_micros: 900, live_agents: 42 })
            .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (epoch, micros, live): (i64, i64, i64) = conn.query_row(
            "SELECT epoch, elapsed_micros, live_agents FROM epoch_summaries WHERE epoch = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(epoch, 7);
        assert_eq!(micros, 900);
        assert_eq!(live, 42);
    }

    #[test]
    fn sqlite_series_count() {
        let mut store = OutputStore::new();
        for e in 0..5 {
            store.record("sheep", Epoch(e), e as f64);
            store.record("wolves", Epoch(e), 1.0);
        }

        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        write_output_store(&store, &mut w).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM series", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 10);
        let value: f64 = conn.query_row(
            "SELECT value FROM series WHERE series = 'sheep' AND epoch = 3", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(value, 3.0);
    }

    #[test]
    fn sqlite_series_sample_replaced() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_series(&[SeriesRow { series: "a", epoch: 0, value: 1.0 }]).unwrap();
        w.write_series(&[SeriesRow { series: "a", epoch: 0, value: 2.0 }]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (count, value): (i64, f64) = conn.query_row(
            "SELECT COUNT(*), MAX(value) FROM series", [], |r| Ok((r.get(0)?, r.get(1)?))
        ).unwrap();
        assert_eq!(count, 1);
        assert_eq!(value, 2.0);
    }
}
