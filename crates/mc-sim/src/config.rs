//! Run configuration for the epidemic simulation.

use mc_core::{BoundaryBox, DurationSpec, Interval, McError, McResult, validate_dt};
use mc_infection::{InfectionSpec, MaskProtection};
use mc_population::{OutcomeScheduler, SpeedRange};

/// Every knob of an epidemic run.
///
/// Times are in hours and lengths in metres by convention; nothing in the
/// model depends on the units as long as they are used consistently.
///
/// # Example
///
/// ```rust
/// use mc_sim::EpidemicConfig;
///
/// let cfg = EpidemicConfig { n_healthy: 500, steps: 200, ..EpidemicConfig::default() };
/// cfg.validate().unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpidemicConfig {
    /// Individuals ill at time 0.
    pub n_ill: usize,

    /// Individuals healthy at time 0.
    pub n_healthy: usize,

    /// Rectangle the initial population is spread over.  Clipped to
    /// `bounds` before use.
    pub spawn: BoundaryBox,

    pub speed: SpeedRange,

    /// The walls everyone bounces off.
    pub bounds: BoundaryBox,

    pub infection: InfectionSpec,

    /// Time from infection to recovery.
    pub recovery: DurationSpec,

    /// Time from infection to death.
    pub death: DurationSpec,

    /// Mask protection factor (`>= 1`); `None` means no masks.
    pub mask: Option<f64>,

    pub dt: f64,

    pub steps: u64,

    pub seed: u64,

    /// Keep a deep copy of the population every `snapshot_interval` steps.
    pub record_trace: bool,

    pub snapshot_interval: u64,

    /// Shrink `dt` so an average mover covers at most half an infection
    /// radius per step (see [`adapt_time_step`](crate::adapt_time_step)).
    pub adaptive_dt: bool,
}

impl Default for EpidemicConfig {
    fn default() -> Self {
        let square = |half: f64| BoundaryBox {
            x: Interval { min: -half, max: half },
            y: Interval { min: -half, max: half },
        };
        Self {
            n_ill:             1,
            n_healthy:         100,
            spawn:             square(250.0),
            speed:             SpeedRange { min: 5.0, max: 30.0 },
            bounds:            square(600.0),
            infection:         InfectionSpec::default(),
            recovery:          DurationSpec::new(840.0, 240.0),
            death:             DurationSpec::new(960.0, 240.0),
            mask:              None,
            dt:                0.5,
            steps:             1440,
            seed:              42,
            record_trace:      false,
            snapshot_interval: 1,
            adaptive_dt:       false,
        }
    }
}

impl EpidemicConfig {
    /// Check every field.  Nothing is sampled.
    pub fn validate(&self) -> McResult<()> {
        if self.n_ill == 0 || self.n_healthy == 0 {
            return Err(McError::InvalidInput(format!(
                "population counts must be positive, got healthy={} ill={}",
                self.n_healthy, self.n_ill
            )));
        }
        self.spawn.validate()?;
        self.bounds.validate()?;
        self.spawn.intersect(&self.bounds)?;
        self.speed.validate()?;
        self.infection.validate()?;
        self.scheduler()?;
        self.mask_protection()?;
        validate_dt(self.dt)?;
        if self.steps == 0 {
            return Err(McError::InvalidInput("number of steps must be positive".into()));
        }
        if self.snapshot_interval == 0 {
            return Err(McError::InvalidInput("snapshot interval must be positive".into()));
        }
        Ok(())
    }

    pub fn mask_protection(&self) -> McResult<MaskProtection> {
        MaskProtection::from_option(self.mask)
    }

    pub fn scheduler(&self) -> McResult<OutcomeScheduler> {
        OutcomeScheduler::new(self.recovery, self.death)
    }

    /// Simulated time span `dt · steps`.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.dt * self.steps as f64
    }
}
