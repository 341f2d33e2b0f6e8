//! life: Conway's Game of Life on the abm epoch scheduler.
//!
//! Every cell is an agent placed on the `cells` occupancy grid.  Liveness is
//! kept in the `alive` scalar grid (1.0 = alive) so neighbors can read it.
//!
//! - Prologue: each cell counts live neighbors and decides its next state.
//! - Main: each cell writes that state back to `alive`.
//! - Epilogue: `Census` records the population and requests exit once every
//!   cell is dead; `AgentSummary` records alive/dead counts by kind.
//!
//! Because every prologue runs before any main, the update is synchronous
//! without double-buffering the grid.
//!
//! Set `RUST_LOG=info` (or `debug`) to see per-epoch progress.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use abm_core::{AgentId, HelperId, SimConfig};
use abm_output::{AgentSummary, CsvWriter, SimOutputObserver};
use abm_sim::{Agent, Helper, Sim, SimBuilder, SimError, SimResult, Steppable};
use abm_spatial::{Coord, Extent, OccupancyGrid, ScalarGrid};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:   u32 = 40;
const HEIGHT:  u32 = 20;
const DENSITY: f64 = 0.3;
const EPOCHS:  u64 = 200;
const SEED:    u64 = 42;

const CELLS: &str = "cells";
const ALIVE: &str = "alive";
const OUTPUT_DIR: &str = "output/life";

// ── Agents ────────────────────────────────────────────────────────────────────

struct Cell {
    alive: bool,
    next:  bool,
}

impl Cell {
    fn here(me: AgentId, sim: &Sim) -> SimResult<Coord> {
        sim.position(me, CELLS).ok_or_else(|| SimError::NotPlaced {
            agent:       me,
            environment: CELLS.to_owned(),
        })
    }
}

impl Steppable<AgentId> for Cell {
    fn on_prologue(&mut self, me: AgentId, sim: &mut Sim) -> SimResult<()> {
        let here = Self::here(me, sim)?;
        let field = sim.environments.scalar(ALIVE)?;
        let neighbors = field
            .moore_neighborhood(here)
            .into_iter()
            .filter(|&c| field.get(c) > 0.0)
            .count();
        self.next = matches!((self.alive, neighbors), (true, 2) | (_, 3));
        Ok(())
    }

    fn on_main(&mut self, me: AgentId, sim: &mut Sim) -> SimResult<()> {
        if self.next == self.alive {
            return Ok(());
        }
        self.alive = self.next;
        let here = Self::here(me, sim)?;
        sim.environments
            .scalar_mut(ALIVE)?
            .set(here, if self.alive { 1.0 } else { 0.0 });
        Ok(())
    }
}

impl Agent for Cell {
    fn kind(&self) -> &str {
        if self.alive { "alive" } else { "dead" }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records the live population and stops the run when it reaches zero.
struct Census;

impl Steppable<HelperId> for Census {
    fn on_epilogue(&mut self, _me: HelperId, sim: &mut Sim) -> SimResult<()> {
        let population = sim.environments.scalar(ALIVE)?.total();
        sim.output.record("population", sim.current_epoch, population);
        if population == 0.0 {
            sim.request_exit();
        }
        Ok(())
    }
}

impl Helper for Census {}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn render(sim: &Sim) -> Result<String> {
    let field = sim.environments.scalar(ALIVE)?;
    let mut out = String::new();
    for y in 0..HEIGHT as i64 {
        for x in 0..WIDTH as i64 {
            out.push(if field.get(Coord::xy(x, y)) > 0.0 { '#' } else { '.' });
        }
        out.push('\n');
    }
    Ok(out)
}

fn main() -> Result<()> {
    init_tracing();

    let extent = Extent::plane(WIDTH, HEIGHT);
    let config = SimConfig { epochs: EPOCHS, verbose: false, seed: SEED };
    info!(%extent, epochs = EPOCHS, seed = SEED, "building life");

    // 1. Sim with both grids and the two helpers.
    let mut sim = SimBuilder::new(config)
        .environment(OccupancyGrid::new(CELLS, extent))
        .environment(ScalarGrid::new(ALIVE, extent))
        .helper(Census)
        .helper(AgentSummary::new().prefix("cells."))
        .build()?;

    // 2. One cell agent per coordinate, randomly seeded.
    for coord in extent.cells() {
        let alive = sim.rng.gen_bool(DENSITY);
        let id = sim.schedule.add_agent(Cell { alive, next: alive });
        sim.place(id, CELLS, coord)?;
        if alive {
            sim.environments.scalar_mut(ALIVE)?.set(coord, 1.0);
        }
    }
    println!("Initial population: {}", sim.environments.scalar(ALIVE)?.total());
    print!("{}", render(&sim)?);

    // 3. Run with CSV output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);
    let report = sim.run_with(&mut obs)?;
    obs.finish(&sim.output)?;

    // 4. Summary.
    println!();
    match report.stopped_at {
        Some(epoch) => println!("Population died out at {epoch}"),
        None => println!("Ran all {} epochs", report.epochs_run),
    }
    println!(
        "Simulated {} epochs in {:.3} s ({:?} per epoch)",
        report.epochs_run,
        report.total.as_secs_f64(),
        report.mean_epoch_time(),
    );
    if let Some((epoch, population)) = sim.output.latest("population") {
        println!("Final population at {epoch}: {population}");
    }
    println!("Output written to {OUTPUT_DIR}/");
    println!();
    print!("{}", render(&sim)?);

    Ok(())
}
