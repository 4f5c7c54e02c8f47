//! Full lattice run: random initial state followed by a fixed number of sweeps.

use tracing::{debug, info};

use mc_core::{McError, McResult, SimRng};

use crate::{Coupling, NeighborWindow, SpinGrid, metropolis_sweep};

/// Slack allowed when checking `p_up + p_down <= 1`.
const PROBABILITY_EPS: f64 = 1e-9;

// ── LatticeConfig ─────────────────────────────────────────────────────────────

/// Parameters of a lattice run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatticeConfig {
    pub rows: usize,
    pub cols: usize,

    /// Relative weight of an up spin in the initial state.
    pub p_up: f64,
    /// Relative weight of a down spin in the initial state.
    /// `p_up + p_down` must not exceed 1.
    pub p_down: f64,

    pub j:    f64,
    pub h:    f64,
    pub beta: f64,

    /// Number of sweeps; no early stopping.
    pub iterations: usize,

    /// RNG seed.  `None` seeds from OS entropy (non-reproducible).
    pub seed: Option<u64>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            rows:       500,
            cols:       500,
            p_up:       0.5,
            p_down:     0.5,
            j:          1.0,
            h:          0.0,
            beta:       1.0,
            iterations: 100,
            seed:       None,
        }
    }
}

impl LatticeConfig {
    pub fn coupling(&self) -> McResult<Coupling> {
        Coupling::new(self.j, self.h, self.beta)
    }

    /// Probability that an initial cell is +1.
    ///
    /// The two weights are normalised, so `[0.3, 0.3]` behaves like
    /// `[0.5, 0.5]`.
    pub fn up_probability(&self) -> McResult<f64> {
        let (up, down) = (self.p_up, self.p_down);
        if !(0.0..=1.0).contains(&up) || !(0.0..=1.0).contains(&down) {
            return Err(McError::InvalidParameter(format!(
                "initial spin probabilities must lie in [0, 1], got [{up}, {down}]"
            )));
        }
        let total = up + down;
        if total > 1.0 + PROBABILITY_EPS {
            return Err(McError::InvalidParameter(format!(
                "initial spin probabilities sum to {total}, which exceeds 1"
            )));
        }
        if total == 0.0 {
            return Err(McError::InvalidParameter(
                "initial spin probabilities are both zero".into(),
            ));
        }
        Ok(up / total)
    }

    pub fn validate(&self) -> McResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(McError::InvalidInput(format!(
                "lattice size must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        self.coupling()?;
        self.up_probability()?;
        Ok(())
    }
}

// ── LatticeSimulation ─────────────────────────────────────────────────────────

/// Initial and final configuration of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeRun {
    pub initial:    SpinGrid,
    pub final_grid: SpinGrid,
}

/// A validated lattice run, ready to execute.
///
/// ```rust,ignore
/// let config = LatticeConfig { rows: 64, cols: 64, seed: Some(7), ..Default::default() };
/// let run = LatticeSimulation::new(config, NeighborWindow::moore())?.run()?;
/// println!("m = {}", run.final_grid.magnetization());
/// ```
pub struct LatticeSimulation {
    config:   LatticeConfig,
    window:   NeighborWindow,
    coupling: Coupling,
    p_up:     f64,
}

impl LatticeSimulation {
    /// Validate `config`.  Fails with `InvalidParameter` for `beta < 0` or
    /// bad probabilities and `InvalidInput` for an empty lattice.
    pub fn new(config: LatticeConfig, window: NeighborWindow) -> McResult<Self> {
        config.validate()?;
        let coupling = config.coupling()?;
        let p_up = config.up_probability()?;
        Ok(Self { config, window, coupling, p_up })
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Run all sweeps and return the initial and final grids.
    pub fn run(&self) -> McResult<LatticeRun> {
        self.run_with(|_, _, _| {})
    }

    /// Like [`run`](Self::run), calling `on_sweep(index, grid, flips)` after
    /// every sweep.
    pub fn run_with<F>(&self, mut on_sweep: F) -> McResult<LatticeRun>
    where
        F: FnMut(usize, &SpinGrid, usize),
    {
        let cfg = &self.config;
        let mut rng = SimRng::from_optional_seed(cfg.seed);

        let initial = SpinGrid::random(cfg.rows, cfg.cols, self.p_up, &mut rng)?;
        let mut grid = initial.clone();

        info!(
            rows = cfg.rows,
            cols = cfg.cols,
            j = cfg.j,
            h = cfg.h,
            beta = cfg.beta,
            iterations = cfg.iterations,
            "starting lattice run",
        );

        for sweep in 0..cfg.iterations {
            let flips = metropolis_sweep(&mut grid, &self.coupling, &self.window, &mut rng)?;
            debug!(sweep, flips, magnetization = grid.magnetization(), "sweep done");
            on_sweep(sweep, &grid, flips);
        }

        info!(magnetization = grid.magnetization(), "lattice run finished");

        Ok(LatticeRun { initial, final_grid: grid })
    }
}
