//! pandemic: agent-based epidemic in a walled square.
//!
//! Usage: `pandemic [config.json] [output-dir]`
//!
//! Without a config file the default run is used: 1 ill and 100 healthy
//! individuals spawned in a 500 × 500 square inside a 1200 × 1200 box,
//! 1440 steps of dt 0.5.  Any field missing from the JSON keeps its
//! default.  `RUST_LOG=info` (or `debug`) shows the library's own logging.
//!
//! `snapshots.csv` gets every individual every `snapshot_interval` steps
//! (every step by default) regardless of `record_trace`; raise the interval
//! in the config to keep the file small.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use mc_output::writer::OutputWriter;
use mc_output::{CsvWriter, RunSummary, SimOutputObserver, write_summary};
use mc_population::{CohortKind, Population};
use mc_sim::{
    EpidemicConfig, SimBuilder, SimObserver, SimulationStatistics, StepStats, StepTransitions,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/pandemic";
/// Rows in the closing time-series table.
const TABLE_ROWS:         usize = 12;
/// Progress lines logged over the run.
const PROGRESS_REPORTS:   u64   = 10;

// ── Observer wrapper to tally transitions ─────────────────────────────────────

struct TallyObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    report_every:  u64,
    infected:      usize,
    recovered:     usize,
    died:          usize,
    snapshot_rows: usize,
}

impl<W: OutputWriter> TallyObserver<W> {
    fn new(inner: SimOutputObserver<W>, total_steps: u64) -> Self {
        Self {
            inner,
            report_every: (total_steps / PROGRESS_REPORTS).max(1),
            infected: 0,
            recovered: 0,
            died: 0,
            snapshot_rows: 0,
        }
    }
}

impl<W: OutputWriter> SimObserver for TallyObserver<W> {
    fn on_sim_start(&mut self, initial: &StepStats, population: &Population) {
        self.inner.on_sim_start(initial, population);
    }

    fn on_step_end(&mut self, stats: &StepStats, transitions: &StepTransitions) {
        self.infected += transitions.infected;
        self.recovered += transitions.recovered;
        self.died += transitions.died;
        if stats.step.is_multiple_of(self.report_every) {
            info!(step = stats.step, time = stats.time, counts = %stats.counts, "progress");
        }
        self.inner.on_step_end(stats, transitions);
    }

    fn on_snapshot(&mut self, step: u64, time: f64, population: &Population) {
        self.snapshot_rows += population.total();
        self.inner.on_snapshot(step, time, population);
    }

    fn on_sim_end(&mut self, statistics: &SimulationStatistics) {
        self.inner.on_sim_end(statistics);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<EpidemicConfig> {
    let Some(path) = path else {
        return Ok(EpidemicConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    // 1. Config.
    let config = load_config(config_path.as_deref())?;
    println!("=== pandemic: proximity epidemic ===");
    println!(
        "Ill: {}  |  Healthy: {}  |  Seed: {}",
        config.n_ill, config.n_healthy, config.seed
    );
    println!(
        "Infection radius: {}  |  Mask: {}",
        config.infection.radius,
        config.mask.map_or_else(|| "none".to_owned(), |m| m.to_string()),
    );

    // 2. Build sim (dt may be shrunk when adaptive_dt is set).
    let mut sim = SimBuilder::proximity(config)?.build()?;
    println!(
        "Sim: {} steps × dt {} (span {}), snapshot every {} steps",
        sim.total_steps(),
        sim.dt(),
        sim.config().duration(),
        sim.config().snapshot_interval,
    );
    println!();

    // 3. Output.
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = TallyObserver::new(SimOutputObserver::new(writer), sim.total_steps());

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    let summary_path = write_summary(&output_dir, &RunSummary::from_sim(&sim))?;

    // 5. Summary.
    let summary = sim.summary();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  statistics.csv : {} rows", sim.statistics().len());
    println!("  snapshots.csv  : {} rows", obs.snapshot_rows);
    println!("  {}", summary_path.display());
    println!();
    println!(
        "Infections: {}  |  Recoveries: {}  |  Deaths: {}",
        obs.infected, obs.recovered, obs.died
    );
    println!("Peak ill: {} at t = {:.1}", summary.peak_ill, summary.peak_ill_time);
    println!();

    // 6. Time series table.
    let stats = sim.statistics();
    let stride = stats.len().div_ceil(TABLE_ROWS).max(1);
    print!("{:>10}", "time");
    for kind in CohortKind::ALL {
        print!(" {:>10}", kind.as_str());
    }
    println!();
    println!("{}", "-".repeat(10 + 11 * CohortKind::ALL.len()));
    let rows = stats.entries().iter().step_by(stride).chain(stats.last());
    let mut last_step = None;
    for entry in rows {
        // The final entry may already have been printed by the stride.
        if last_step == Some(entry.step) {
            continue;
        }
        last_step = Some(entry.step);
        print!("{:>10.1}", entry.time);
        for kind in CohortKind::ALL {
            print!(" {:>10}", entry.counts.get(kind));
        }
        println!();
    }

    Ok(())
}
