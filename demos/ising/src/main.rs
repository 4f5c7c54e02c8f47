//! ising: Metropolis sampling of a 2D spin lattice.
//!
//! Usage: `ising [config.json] [moore|von-neumann]`
//!
//! The JSON holds a `LatticeConfig`; missing fields keep their defaults
//! (500 × 500, J = 1, h = 0, β = 1, 100 sweeps).  Without a config a small
//! seeded 128 × 128 run is used so the demo finishes quickly.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;

use mc_lattice::{LatticeConfig, LatticeSimulation, NeighborWindow};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEMO_SIZE:      usize = 128;
const DEMO_SWEEPS:    usize = 50;
const SEED:           u64   = 42;
/// Magnetisation lines logged over the run.
const REPORTS:        usize = 10;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<LatticeConfig> {
    let Some(path) = path.map(Path::new) else {
        return Ok(LatticeConfig {
            rows:       DEMO_SIZE,
            cols:       DEMO_SIZE,
            iterations: DEMO_SWEEPS,
            seed:       Some(SEED),
            ..LatticeConfig::default()
        });
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn parse_window(name: Option<&str>) -> Result<NeighborWindow> {
    match name {
        None | Some("moore") => Ok(NeighborWindow::moore()),
        Some("von-neumann") => Ok(NeighborWindow::von_neumann()),
        Some(other) => bail!("unknown neighbour window {other:?} (expected moore or von-neumann)"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let window = parse_window(args.get(1).map(String::as_str))?;

    println!("=== ising: Metropolis lattice ===");
    println!(
        "Lattice: {} × {}  |  J = {}  h = {}  β = {}  |  Sweeps: {}",
        config.rows, config.cols, config.j, config.h, config.beta, config.iterations
    );
    println!("Window: {} × {}", window.rows(), window.cols());
    println!();

    let report_every = (config.iterations / REPORTS).max(1);
    let sim = LatticeSimulation::new(config, window)?;

    let t0 = Instant::now();
    let mut total_flips = 0usize;
    let run = sim.run_with(|sweep, grid, flips| {
        total_flips += flips;
        if (sweep + 1).is_multiple_of(report_every) {
            info!(sweep = sweep + 1, flips, magnetization = grid.magnetization(), "sweep");
        }
    })?;
    let elapsed = t0.elapsed();

    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  total flips      : {total_flips}");
    println!("  initial m        : {:+.4}", run.initial.magnetization());
    println!("  final m          : {:+.4}", run.final_grid.magnetization());
    println!(
        "  final up spins   : {} / {}",
        run.final_grid.count_up(),
        run.final_grid.len()
    );

    Ok(())
}
