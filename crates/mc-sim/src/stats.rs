//! Per-step statistics and population snapshots.

use mc_population::{CohortCounts, CohortKind, Population};

/// Cohort sizes recorded at the end of one step (step 0 is the initial
/// state at time 0).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepStats {
    pub step:   u64,
    pub time:   f64,
    pub counts: CohortCounts,
}

/// Cohort moves performed by one step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepTransitions {
    pub died:      usize,
    pub recovered: usize,
    pub infected:  usize,
}

impl StepTransitions {
    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.died == 0 && self.recovered == 0 && self.infected == 0
    }
}

/// Append-only time series of [`StepStats`], one entry per recorded step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationStatistics {
    entries: Vec<StepStats>,
}

impl SimulationStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, step: u64, time: f64, population: &Population) -> StepStats {
        let entry = StepStats { step, time, counts: population.counts() };
        self.entries.push(entry);
        entry
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StepStats] {
        &self.entries
    }

    pub fn first(&self) -> Option<&StepStats> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&StepStats> {
        self.entries.last()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.time)
    }

    /// One cohort's size over time.
    pub fn series(&self, kind: CohortKind) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(move |e| e.counts.get(kind))
    }

    /// The entry with the most ill individuals (earliest on ties).
    pub fn peak_ill(&self) -> Option<&StepStats> {
        self.entries.iter().reduce(|best, e| if e.counts.ill > best.counts.ill { e } else { best })
    }
}

/// A deep copy of the population at the end of a step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationSnapshot {
    pub step:       u64,
    pub time:       f64,
    pub population: Population,
}
