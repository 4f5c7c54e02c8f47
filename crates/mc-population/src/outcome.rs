//! Recover-or-die scheduling for newly ill individuals.

use std::fmt;

use mc_core::{DurationSpec, McResult, SimRng, TruncatedNormal};

/// What an ill individual is destined for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Recover,
    Die,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Recover => "recover",
            Outcome::Die => "die",
        })
    }
}

/// A resolved outcome and the absolute time at which it fires.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScheduledOutcome {
    pub outcome:    Outcome,
    pub event_time: f64,
}

/// Samples time-to-recovery and time-to-death and keeps whichever is sooner.
///
/// Both durations come from independent normals truncated to `[0, ∞)`.
pub struct OutcomeScheduler {
    recovery: TruncatedNormal,
    death:    TruncatedNormal,
}

impl OutcomeScheduler {
    pub fn new(recovery: DurationSpec, death: DurationSpec) -> McResult<Self> {
        Ok(Self {
            recovery: recovery.distribution()?,
            death:    death.distribution()?,
        })
    }

    /// Decide between two already-drawn durations for an individual falling
    /// ill at `t0`.
    ///
    /// `Recover` only when the recovery draw is strictly smaller; a tie
    /// resolves to `Die`.
    #[inline]
    pub fn resolve(t0: f64, recovery_draw: f64, death_draw: f64) -> ScheduledOutcome {
        if recovery_draw < death_draw {
            ScheduledOutcome { outcome: Outcome::Recover, event_time: t0 + recovery_draw }
        } else {
            ScheduledOutcome { outcome: Outcome::Die, event_time: t0 + death_draw }
        }
    }

    /// Schedule outcomes for `n` individuals falling ill at `t0`.
    ///
    /// All `n` recovery durations are drawn first, then all `n` death
    /// durations.
    pub fn schedule(&self, n: usize, t0: f64, rng: &mut SimRng) -> Vec<ScheduledOutcome> {
        let recovery = rng.sample_vec(&self.recovery, n);
        let death = rng.sample_vec(&self.death, n);
        recovery
            .into_iter()
            .zip(death)
            .map(|(r, d)| Self::resolve(t0, r, d))
            .collect()
    }
}
