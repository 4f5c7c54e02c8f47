//! Plain data row types written by output backends.

use mc_core::Vec2;
use mc_population::{CohortKind, Population};
use mc_sim::StepStats;

/// One individual's position (and velocity, unless dead) at a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub step:     u64,
    pub time:     f64,
    pub cohort:   CohortKind,
    pub position: Vec2,
    /// `None` for the Dead.
    pub velocity: Option<Vec2>,
}

impl SnapshotRow {
    /// Flatten every cohort of `population` into rows, cohort by cohort in
    /// Healthy, Ill, Recovered, Dead order.
    pub fn from_population(step: u64, time: f64, population: &Population) -> Vec<SnapshotRow> {
        let mut rows = Vec::with_capacity(population.total());
        for cohort in CohortKind::ALL {
            let positions = population.positions(cohort);
            let velocities = population.velocities(cohort);
            rows.extend(positions.iter().enumerate().map(|(i, &position)| SnapshotRow {
                step,
                time,
                cohort,
                position,
                velocity: velocities.map(|v| v[i]),
            }));
        }
        rows
    }
}

/// Cohort sizes at the end of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsRow {
    pub step:      u64,
    pub time:      f64,
    pub healthy:   u64,
    pub ill:       u64,
    pub recovered: u64,
    pub dead:      u64,
}

impl From<&StepStats> for StatsRow {
    fn from(s: &StepStats) -> Self {
        Self {
            step:      s.step,
            time:      s.time,
            healthy:   s.counts.healthy as u64,
            ill:       s.counts.ill as u64,
            recovered: s.counts.recovered as u64,
            dead:      s.counts.dead as u64,
        }
    }
}
