//! Fluent builder for the initial population.
//!
//! # Usage
//!
//! ```rust
//! use mc_core::{BoundaryBox, DurationSpec, SimRng};
//! use mc_population::{OutcomeScheduler, PopulationBuilder, SpeedRange};
//!
//! let spawn = BoundaryBox::centered_square(250.0).unwrap();
//! let speed = SpeedRange::new(5.0, 30.0).unwrap();
//! let scheduler = OutcomeScheduler::new(
//!     DurationSpec::new(840.0, 240.0),
//!     DurationSpec::new(960.0, 240.0),
//! ).unwrap();
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(spawn, speed)
//!     .healthy(100)
//!     .ill(3)
//!     .build(&scheduler, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.total(), 103);
//! assert!(population.recovered.is_empty() && population.dead.is_empty());
//! ```

use std::f64::consts::TAU;

use tracing::debug;

use mc_core::{BoundaryBox, McError, McResult, SimRng, Vec2};

use crate::{Cohort, IllCohort, OutcomeScheduler, Population};

// ── SpeedRange ────────────────────────────────────────────────────────────────

/// Range of initial speeds.  Speeds are drawn uniformly in `[min, max)`
/// (not Maxwell-distributed) and directions uniformly in `[0, 2π)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub fn new(min: f64, max: f64) -> McResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> McResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 || self.min > self.max {
            return Err(McError::InvalidInput(format!(
                "speed range must satisfy 0 <= min <= max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Midpoint speed.
    #[inline]
    pub fn mean(&self) -> f64 {
        0.5 * (self.min + self.max)
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

/// Builds the Healthy and Ill cohorts of a fresh run.
pub struct PopulationBuilder {
    spawn:     BoundaryBox,
    speed:     SpeedRange,
    bounds:    Option<BoundaryBox>,
    n_healthy: usize,
    n_ill:     usize,
}

impl PopulationBuilder {
    /// Individuals will be placed uniformly inside `spawn`.
    pub fn new(spawn: BoundaryBox, speed: SpeedRange) -> Self {
        Self { spawn, speed, bounds: None, n_healthy: 0, n_ill: 0 }
    }

    pub fn healthy(mut self, n: usize) -> Self {
        self.n_healthy = n;
        self
    }

    pub fn ill(mut self, n: usize) -> Self {
        self.n_ill = n;
        self
    }

    /// Clip the spawn rectangle to the simulation box before placing anyone.
    pub fn within(mut self, bounds: BoundaryBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Draw the initial cohorts.
    ///
    /// The ill cohort is generated first (positions, velocities, then
    /// outcomes scheduled from time 0), then the healthy cohort.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if either count is zero, the speed range is malformed,
    /// or the spawn rectangle does not overlap the simulation box.
    pub fn build(&self, scheduler: &OutcomeScheduler, rng: &mut SimRng) -> McResult<Population> {
        if self.n_healthy == 0 || self.n_ill == 0 {
            return Err(McError::InvalidInput(format!(
                "population counts must be positive, got healthy={} ill={}",
                self.n_healthy, self.n_ill
            )));
        }
        self.speed.validate()?;
        self.spawn.validate()?;
        let spawn = match &self.bounds {
            Some(bounds) => self.spawn.intersect(bounds)?,
            None => self.spawn,
        };

        let movers = sample_movers(self.n_ill, &spawn, &self.speed, rng);
        let mut ill = IllCohort::new();
        let scheduled = scheduler.schedule(self.n_ill, 0.0, rng);
        for ((p, v), s) in movers.positions.into_iter().zip(movers.velocities).zip(scheduled) {
            ill.push(p, v, s.outcome, s.event_time);
        }

        let healthy = sample_movers(self.n_healthy, &spawn, &self.speed, rng);

        debug!(
            healthy = healthy.len(),
            ill = ill.len(),
            spawn = %spawn,
            "initial population drawn",
        );

        Population::new(healthy, ill)
    }
}

/// `n` uniform positions in `spawn` with uniform speed and direction.
///
/// Draw order: all x, all y, all speeds, all angles.
fn sample_movers(n: usize, spawn: &BoundaryBox, speed: &SpeedRange, rng: &mut SimRng) -> Cohort {
    let xs = rng.uniform_vec(n, spawn.x.min, spawn.x.max);
    let ys = rng.uniform_vec(n, spawn.y.min, spawn.y.max);
    let speeds = rng.uniform_vec(n, speed.min, speed.max);
    let angles = rng.uniform_vec(n, 0.0, TAU);

    Cohort {
        positions:  xs.into_iter().zip(ys).map(|(x, y)| Vec2::new(x, y)).collect(),
        velocities: speeds
            .into_iter()
            .zip(angles)
            .map(|(s, theta)| Vec2::from_polar(s, theta))
            .collect(),
    }
}
