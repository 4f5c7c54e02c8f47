//! Cohort column storage.
//!
//! # Why parallel arrays?
//!
//! The per-step hot paths (kinematics over every mover, distance scans of
//! healthy positions against each ill individual) touch one or two columns
//! at a time.  Keeping `positions`, `velocities`, and (for the ill) the
//! scheduled outcome in separate `Vec`s keeps those scans contiguous, and a
//! cohort transfer is just "remove these columns here, push them there".
//!
//! Every column of a cohort always has the same length; the removal helpers
//! below preserve that and preserve the relative order of survivors.

use mc_core::{McError, McResult, Vec2};

use crate::Outcome;

// ── Column helpers ────────────────────────────────────────────────────────────

/// Boolean mask of length `len` with `true` at every index in `indices`.
fn removal_mask(len: usize, indices: &[usize]) -> McResult<Vec<bool>> {
    let mut mask = vec![false; len];
    for &i in indices {
        match mask.get_mut(i) {
            Some(slot) => *slot = true,
            None => {
                return Err(McError::InvalidInput(format!(
                    "cohort index {i} out of range for length {len}"
                )));
            }
        }
    }
    Ok(mask)
}

/// Split `column` by `mask`: masked items are returned (in index order), the
/// rest stay in place, compacted, in their original order.
fn take_masked<T>(column: &mut Vec<T>, mask: &[bool]) -> Vec<T> {
    let mut kept = Vec::with_capacity(column.len());
    let mut taken = Vec::new();
    for (item, &remove) in column.drain(..).zip(mask) {
        if remove {
            taken.push(item);
        } else {
            kept.push(item);
        }
    }
    *column = kept;
    taken
}

fn check_lengths(what: &str, expected: usize, got: usize) -> McResult<()> {
    if expected != got {
        return Err(McError::InvalidInput(format!(
            "{what} has {got} entries, expected {expected}"
        )));
    }
    Ok(())
}

// ── Cohort ────────────────────────────────────────────────────────────────────

/// Moving individuals without a pending outcome: the Healthy and Recovered
/// cohorts.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cohort {
    pub positions:  Vec<Vec2>,
    pub velocities: Vec<Vec2>,
}

impl Cohort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing columns; both must have the same length.
    pub fn from_columns(positions: Vec<Vec2>, velocities: Vec<Vec2>) -> McResult<Self> {
        let cohort = Self { positions, velocities };
        cohort.validate()?;
        Ok(cohort)
    }

    pub fn validate(&self) -> McResult<()> {
        check_lengths("velocity column", self.positions.len(), self.velocities.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn push(&mut self, position: Vec2, velocity: Vec2) {
        self.positions.push(position);
        self.velocities.push(velocity);
    }

    /// Move every member of `other` to the end of `self`.
    pub fn append(&mut self, other: &mut Cohort) {
        self.positions.append(&mut other.positions);
        self.velocities.append(&mut other.velocities);
    }

    /// Remove the members at `indices` and return them as a new cohort.
    ///
    /// Survivors keep their relative order; removed members are returned in
    /// ascending index order.  Duplicate indices are harmless.
    pub fn remove_indices(&mut self, indices: &[usize]) -> McResult<Cohort> {
        let mask = removal_mask(self.len(), indices)?;
        Ok(Cohort {
            positions:  take_masked(&mut self.positions, &mask),
            velocities: take_masked(&mut self.velocities, &mask),
        })
    }
}

// ── IllCohort ─────────────────────────────────────────────────────────────────

/// Ill individuals: position, velocity, and the outcome they are destined
/// for together with the absolute time at which it fires.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IllCohort {
    pub positions:   Vec<Vec2>,
    pub velocities:  Vec<Vec2>,
    pub outcomes:    Vec<Outcome>,
    pub event_times: Vec<f64>,
}

impl IllCohort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> McResult<()> {
        let n = self.positions.len();
        check_lengths("ill velocity column", n, self.velocities.len())?;
        check_lengths("ill outcome column", n, self.outcomes.len())?;
        check_lengths("ill event-time column", n, self.event_times.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn push(&mut self, position: Vec2, velocity: Vec2, outcome: Outcome, event_time: f64) {
        self.positions.push(position);
        self.velocities.push(velocity);
        self.outcomes.push(outcome);
        self.event_times.push(event_time);
    }

    /// Indices (ascending) of members destined for `outcome` whose event
    /// time is strictly before `now`.
    pub fn due(&self, outcome: Outcome, now: f64) -> Vec<usize> {
        self.outcomes
            .iter()
            .zip(&self.event_times)
            .enumerate()
            .filter(|&(_, (&o, &t))| o == outcome && t < now)
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove the members at `indices` and return them.  Same ordering rules
    /// as [`Cohort::remove_indices`].
    pub fn remove_indices(&mut self, indices: &[usize]) -> McResult<IllCohort> {
        let mask = removal_mask(self.len(), indices)?;
        Ok(IllCohort {
            positions:   take_masked(&mut self.positions, &mask),
            velocities:  take_masked(&mut self.velocities, &mask),
            outcomes:    take_masked(&mut self.outcomes, &mask),
            event_times: take_masked(&mut self.event_times, &mask),
        })
    }

    /// Drop the outcome columns, keeping position and velocity.
    pub fn into_cohort(self) -> Cohort {
        Cohort { positions: self.positions, velocities: self.velocities }
    }
}

// ── DeadCohort ────────────────────────────────────────────────────────────────

/// The dead: stationary, so only positions are kept.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadCohort {
    pub positions: Vec<Vec2>,
}

impl DeadCohort {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append positions; velocities of the newly dead are discarded.
    pub fn extend_positions(&mut self, positions: impl IntoIterator<Item = Vec2>) {
        self.positions.extend(positions);
    }
}
