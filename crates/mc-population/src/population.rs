//! The four-way population partition.

use std::fmt;

use mc_core::{McError, McResult};

use crate::{Cohort, DeadCohort, IllCohort};

/// Which cohort an individual belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CohortKind {
    Healthy,
    Ill,
    Recovered,
    Dead,
}

impl CohortKind {
    pub const ALL: [CohortKind; 4] =
        [CohortKind::Healthy, CohortKind::Ill, CohortKind::Recovered, CohortKind::Dead];

    pub fn as_str(self) -> &'static str {
        match self {
            CohortKind::Healthy => "healthy",
            CohortKind::Ill => "ill",
            CohortKind::Recovered => "recovered",
            CohortKind::Dead => "dead",
        }
    }

    /// Recovered and Dead never lose members.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, CohortKind::Recovered | CohortKind::Dead)
    }
}

impl fmt::Display for CohortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cohort sizes at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CohortCounts {
    pub healthy:   usize,
    pub ill:       usize,
    pub recovered: usize,
    pub dead:      usize,
}

impl CohortCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.ill + self.recovered + self.dead
    }

    pub fn get(&self, kind: CohortKind) -> usize {
        match kind {
            CohortKind::Healthy => self.healthy,
            CohortKind::Ill => self.ill,
            CohortKind::Recovered => self.recovered,
            CohortKind::Dead => self.dead,
        }
    }
}

impl fmt::Display for CohortCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "healthy={} ill={} recovered={} dead={}",
            self.healthy, self.ill, self.recovered, self.dead
        )
    }
}

/// Every individual of a run, partitioned into four disjoint cohorts.
///
/// The total size never changes after initialisation; individuals only move
/// Healthy → Ill → {Recovered, Dead}.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    pub healthy:   Cohort,
    pub ill:       IllCohort,
    pub recovered: Cohort,
    pub dead:      DeadCohort,
}

impl Population {
    /// Initial partition: Recovered and Dead start empty.
    pub fn new(healthy: Cohort, ill: IllCohort) -> McResult<Self> {
        let population = Self {
            healthy,
            ill,
            recovered: Cohort::new(),
            dead:      DeadCohort::new(),
        };
        population.validate()?;
        Ok(population)
    }

    /// Check that every cohort's columns have matching lengths.
    pub fn validate(&self) -> McResult<()> {
        self.healthy.validate()?;
        self.ill.validate()?;
        self.recovered.validate()
    }

    pub fn counts(&self) -> CohortCounts {
        CohortCounts {
            healthy:   self.healthy.len(),
            ill:       self.ill.len(),
            recovered: self.recovered.len(),
            dead:      self.dead.len(),
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.counts().total()
    }

    /// Positions of one cohort.
    pub fn positions(&self, kind: CohortKind) -> &[mc_core::Vec2] {
        match kind {
            CohortKind::Healthy => &self.healthy.positions,
            CohortKind::Ill => &self.ill.positions,
            CohortKind::Recovered => &self.recovered.positions,
            CohortKind::Dead => &self.dead.positions,
        }
    }

    /// Velocities of one cohort; `None` for the Dead.
    pub fn velocities(&self, kind: CohortKind) -> Option<&[mc_core::Vec2]> {
        match kind {
            CohortKind::Healthy => Some(&self.healthy.velocities),
            CohortKind::Ill => Some(&self.ill.velocities),
            CohortKind::Recovered => Some(&self.recovered.velocities),
            CohortKind::Dead => None,
        }
    }

    /// Fails with `InvalidInput` naming the first non-finite position or
    /// velocity, scanning cohorts in [`CohortKind::ALL`] order.
    pub fn check_finite(&self) -> McResult<()> {
        for kind in CohortKind::ALL {
            if let Some(i) = self.positions(kind).iter().position(|p| !p.is_finite()) {
                return Err(McError::InvalidInput(format!(
                    "non-finite {kind} position at index {i}"
                )));
            }
            let velocities = self.velocities(kind).unwrap_or_default();
            if let Some(i) = velocities.iter().position(|v| !v.is_finite()) {
                return Err(McError::InvalidInput(format!(
                    "non-finite {kind} velocity at index {i}"
                )));
            }
        }
        Ok(())
    }
}
