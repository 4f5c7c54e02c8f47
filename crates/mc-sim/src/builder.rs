//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use mc_core::{SimClock, SimRng};
use mc_infection::{ExposureModel, ProximitySampler};
use mc_kinematics::Kinematics;
use mc_population::{CohortKind, Population, PopulationBuilder};

use crate::{
    EpidemicConfig, PopulationSnapshot, Sim, SimError, SimResult, SimulationStatistics,
    StepEngine, adapt_time_step,
};

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`EpidemicConfig`]: counts, box, specs, `dt`, steps, seed, …
/// - `M: ExposureModel`: usually a [`ProximitySampler`] built from
///   `config.infection` (see [`SimBuilder::proximity`])
///
/// # Optional inputs
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.population(p)`    | Drawn from the config by [`PopulationBuilder`]   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::proximity(config)?.build()?;
/// sim.run(&mut NoopObserver)?;
/// println!("{:?}", sim.summary());
/// ```
pub struct SimBuilder<M: ExposureModel> {
    config:     EpidemicConfig,
    exposure:   M,
    population: Option<Population>,
}

impl SimBuilder<ProximitySampler> {
    /// Builder using the proximity sampler configured by `config.infection`.
    pub fn proximity(config: EpidemicConfig) -> SimResult<Self> {
        let sampler = ProximitySampler::new(config.infection)?;
        Ok(Self::new(config, sampler))
    }
}

impl<M: ExposureModel> SimBuilder<M> {
    pub fn new(config: EpidemicConfig, exposure: M) -> Self {
        Self { config, exposure, population: None }
    }

    /// Start from explicit cohorts instead of sampling them.
    ///
    /// Every column must be consistent and every position inside
    /// `config.bounds`.  Recovered and Dead may be non-empty.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate inputs, draw or check the initial population, record the
    /// state at time 0, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        let config = self.config;
        config.validate()?;

        let mask = config.mask_protection()?;
        let (dt, steps) = if config.adaptive_dt {
            adapt_time_step(config.dt, config.steps, &config.speed, config.infection.radius, mask)?
        } else {
            (config.dt, config.steps)
        };

        let scheduler = config.scheduler()?;
        let mut rng = SimRng::new(config.seed);

        let population = match self.population {
            Some(p) => {
                check_population(&p, &config)?;
                p
            }
            None => PopulationBuilder::new(config.spawn, config.speed)
                .healthy(config.n_healthy)
                .ill(config.n_ill)
                .within(config.bounds)
                .build(&scheduler, &mut rng)?,
        };

        let clock = SimClock::new(dt)?;
        let mut statistics = SimulationStatistics::new();
        statistics.record(0, 0.0, &population);
        let trace = if config.record_trace {
            vec![PopulationSnapshot { step: 0, time: 0.0, population: population.clone() }]
        } else {
            Vec::new()
        };

        info!(
            seed = config.seed,
            dt,
            steps,
            counts = %population.counts(),
            "epidemic simulation built",
        );

        Ok(Sim {
            kinematics: Kinematics::new(config.bounds)?,
            engine: StepEngine::new(scheduler, self.exposure),
            config,
            clock,
            steps,
            mask,
            population,
            rng,
            statistics,
            trace,
            started: false,
        })
    }
}

/// Column lengths, finiteness, and containment of a caller-supplied population.
fn check_population(population: &Population, config: &EpidemicConfig) -> SimResult<()> {
    let columns = [
        ("healthy velocity", population.healthy.len(), population.healthy.velocities.len()),
        ("ill velocity", population.ill.len(), population.ill.velocities.len()),
        ("ill outcome", population.ill.len(), population.ill.outcomes.len()),
        ("ill event-time", population.ill.len(), population.ill.event_times.len()),
        ("recovered velocity", population.recovered.len(), population.recovered.velocities.len()),
    ];
    for (what, expected, got) in columns {
        if expected != got {
            return Err(SimError::CohortMismatch { expected, got, what });
        }
    }

    population.check_finite()?;

    for kind in CohortKind::ALL {
        if let Some((index, &position)) = population
            .positions(kind)
            .iter()
            .enumerate()
            .find(|(_, p)| !config.bounds.contains(**p))
        {
            return Err(SimError::OutOfBounds { cohort: kind.as_str(), index, position });
        }
    }
    Ok(())
}
