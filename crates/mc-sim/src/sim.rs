//! The `Sim` struct and its step loop.

use tracing::{debug, info};

use mc_core::{SimClock, SimRng, validate_dt};
use mc_infection::{ExposureModel, MaskProtection};
use mc_kinematics::Kinematics;
use mc_population::{CohortCounts, Population};

use crate::{
    EpidemicConfig, PopulationSnapshot, SimObserver, SimResult, SimulationStatistics, StepEngine,
    StepStats, StepTransitions,
};

// ── SimSummary ────────────────────────────────────────────────────────────────

/// Headline numbers of a run so far.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub steps:         u64,
    pub time:          f64,
    pub dt:            f64,
    pub initial:       CohortCounts,
    pub last:          CohortCounts,
    pub peak_ill:      usize,
    pub peak_ill_time: f64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The epidemic simulation driver.
///
/// Each step, in order:
///
/// 1. the clock advances by `dt`, giving the new time `now`;
/// 2. the [`StepEngine`] moves due ill individuals to Dead/Recovered and
///    newly infected healthy individuals to Ill;
/// 3. Healthy, Ill, and Recovered move and bounce off the walls (the Dead
///    stay put);
/// 4. cohort sizes are appended to the statistics at `now`;
/// 5. a deep snapshot is kept when tracing and the step is a multiple of the
///    snapshot interval.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: ExposureModel> {
    pub(crate) config:     EpidemicConfig,
    pub(crate) clock:      SimClock,
    pub(crate) steps:      u64,
    pub(crate) mask:       MaskProtection,
    pub(crate) population: Population,
    pub(crate) engine:     StepEngine<M>,
    pub(crate) kinematics: Kinematics,
    pub(crate) rng:        SimRng,
    pub(crate) statistics: SimulationStatistics,
    pub(crate) trace:      Vec<PopulationSnapshot>,
    pub(crate) started:    bool,
}

impl<M: ExposureModel> Sim<M> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EpidemicConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Recorded snapshots; empty unless `config.record_trace` is set.
    pub fn trace(&self) -> &[PopulationSnapshot] {
        &self.trace
    }

    /// Step size used by [`step`](Self::step) (after any adaptation).
    #[inline]
    pub fn dt(&self) -> f64 {
        self.clock.dt
    }

    /// Steps [`run`](Self::run) drives to (after any adaptation).
    #[inline]
    pub fn total_steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.clock.step >= self.steps
    }

    pub fn summary(&self) -> SimSummary {
        let initial = self.statistics.first().map(|s| s.counts).unwrap_or_default();
        let last = self.statistics.last().map(|s| s.counts).unwrap_or_default();
        let (peak_ill, peak_ill_time) =
            self.statistics.peak_ill().map_or((0, 0.0), |s| (s.counts.ill, s.time));
        SimSummary {
            steps: self.clock.step,
            time: self.clock.time,
            dt: self.clock.dt,
            initial,
            last,
            peak_ill,
            peak_ill_time,
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one step of size `dt` with mask protection `mask`.
    ///
    /// Both are validated before anything changes.  Does not call observers.
    pub fn advance(&mut self, dt: f64, mask: Option<f64>) -> SimResult<StepTransitions> {
        validate_dt(dt)?;
        let mask = MaskProtection::from_option(mask)?;
        self.advance_validated(dt, mask).map(|(_, t)| t)
    }

    fn advance_validated(
        &mut self,
        dt:   f64,
        mask: MaskProtection,
    ) -> SimResult<(StepStats, StepTransitions)> {
        // Checked before the clock or any cohort changes.
        self.population.check_finite()?;

        self.clock.advance_by(dt);
        let now = self.clock.time;
        let step = self.clock.step;

        let transitions =
            self.engine.step(&mut self.population, now, dt, mask, &mut self.rng)?;

        let pop = &mut self.population;
        self.kinematics.step(&mut pop.healthy.positions, &mut pop.healthy.velocities, dt)?;
        self.kinematics.step(&mut pop.ill.positions, &mut pop.ill.velocities, dt)?;
        self.kinematics.step(&mut pop.recovered.positions, &mut pop.recovered.velocities, dt)?;

        let stats = self.statistics.record(step, now, &self.population);
        if self.config.record_trace && self.snapshot_due(step) {
            self.trace.push(PopulationSnapshot {
                step,
                time: now,
                population: self.population.clone(),
            });
        }

        debug!(
            step,
            time = now,
            healthy = stats.counts.healthy,
            ill = stats.counts.ill,
            recovered = stats.counts.recovered,
            dead = stats.counts.dead,
            "step complete",
        );
        Ok((stats, transitions))
    }

    #[inline]
    fn snapshot_due(&self, step: u64) -> bool {
        step.is_multiple_of(self.config.snapshot_interval)
    }

    /// Report the initial state to `observer` the first time the sim is
    /// driven through an observer.
    fn announce_start<O: SimObserver>(&mut self, observer: &mut O) {
        if self.started {
            return;
        }
        self.started = true;
        if let Some(initial) = self.statistics.first().copied() {
            observer.on_sim_start(&initial, &self.population);
            observer.on_snapshot(initial.step, initial.time, &self.population);
        }
    }

    /// Advance one step with the configured `dt` and mask, calling observer
    /// hooks around it.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepTransitions> {
        self.announce_start(observer);

        observer.on_step_start(self.clock.step + 1, self.clock.time + self.clock.dt);
        let (stats, transitions) = self.advance_validated(self.clock.dt, self.mask)?;
        observer.on_step_end(&stats, &transitions);
        if self.snapshot_due(stats.step) {
            observer.on_snapshot(stats.step, stats.time, &self.population);
        }
        Ok(transitions)
    }

    /// Run exactly `n` steps from the current position (ignores the
    /// configured step count).
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run until the configured number of steps has been taken.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            steps = self.steps,
            dt = self.clock.dt,
            population = self.population.total(),
            "epidemic run starting",
        );
        self.announce_start(observer);
        while !self.is_finished() {
            self.step(observer)?;
        }
        observer.on_sim_end(&self.statistics);

        let summary = self.summary();
        info!(
            time = summary.time,
            peak_ill = summary.peak_ill,
            peak_ill_time = summary.peak_ill_time,
            final_counts = %summary.last,
            "epidemic run finished",
        );
        Ok(())
    }
}
