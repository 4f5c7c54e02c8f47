//! One epidemic step: outcomes, then new infections.

use tracing::debug;

use mc_core::{McResult, SimRng};
use mc_infection::{ExposureContext, ExposureModel, MaskProtection};
use mc_population::{Outcome, OutcomeScheduler, Population};

use crate::StepTransitions;

/// Applies the cohort transitions of a single step.
///
/// Order within a step:
///
/// 1. ill individuals destined to die whose event time is before `now` move
///    to Dead (their velocity is dropped);
/// 2. ill individuals destined to recover whose event time is before `now`
///    move to Recovered;
/// 3. the exposure model runs against the remaining ill and the current
///    healthy cohort; everyone it returns moves to Ill with an outcome
///    scheduled from `now`.
///
/// Removal compacts each cohort in order and newcomers are appended, so
/// cohort indices do not survive a step.
pub struct StepEngine<M: ExposureModel> {
    scheduler: OutcomeScheduler,
    exposure:  M,
}

impl<M: ExposureModel> StepEngine<M> {
    pub fn new(scheduler: OutcomeScheduler, exposure: M) -> Self {
        Self { scheduler, exposure }
    }

    pub fn step(
        &self,
        population: &mut Population,
        now:        f64,
        dt:         f64,
        mask:       MaskProtection,
        rng:        &mut SimRng,
    ) -> McResult<StepTransitions> {
        population.validate()?;

        // ── Deaths ────────────────────────────────────────────────────────
        let dying = population.ill.due(Outcome::Die, now);
        let died = population.ill.remove_indices(&dying)?;
        population.dead.extend_positions(died.positions);

        // ── Recoveries ────────────────────────────────────────────────────
        let healing = population.ill.due(Outcome::Recover, now);
        let mut recovered = population.ill.remove_indices(&healing)?.into_cohort();
        population.recovered.append(&mut recovered);

        // ── Infections ────────────────────────────────────────────────────
        let ctx = ExposureContext::new(&population.ill.positions, &population.healthy, dt, mask);
        let infected = self.exposure.infected(&ctx, rng)?;
        let newly_ill = population.healthy.remove_indices(&infected)?;
        let scheduled = self.scheduler.schedule(newly_ill.len(), now, rng);
        for ((p, v), s) in newly_ill.positions.into_iter().zip(newly_ill.velocities).zip(scheduled)
        {
            population.ill.push(p, v, s.outcome, s.event_time);
        }

        let transitions = StepTransitions {
            died:      dying.len(),
            recovered: healing.len(),
            infected:  infected.len(),
        };
        debug!(
            now,
            died = transitions.died,
            recovered = transitions.recovered,
            infected = transitions.infected,
            "cohort transitions",
        );
        Ok(transitions)
    }
}
