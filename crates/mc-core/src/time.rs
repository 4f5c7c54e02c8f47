//! Simulation time model.
//!
//! # Design
//!
//! The epidemic model runs in continuous time advanced by a fixed `dt` per
//! step.  `SimClock` keeps both the integer step counter and the elapsed
//! time:
//!
//!   time(step 0) = 0
//!   time(step n) = time(step n-1) + dt
//!
//! Time is accumulated by repeated addition rather than `n * dt` so the
//! recorded time series matches what a loop of `time += dt` produces.  The
//! initial condition is recorded at time 0 and the first advanced step at
//! time `dt`.

use std::fmt;

use crate::{McError, McResult};

/// Step counter plus elapsed simulation time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Default step size used by [`advance`](Self::advance).
    pub dt: f64,
    /// Number of completed steps.
    pub step: u64,
    /// Elapsed simulation time.
    pub time: f64,
}

impl SimClock {
    /// A clock at step 0, time 0.  `dt` must be positive and finite.
    pub fn new(dt: f64) -> McResult<Self> {
        validate_dt(dt)?;
        Ok(Self { dt, step: 0, time: 0.0 })
    }

    /// Advance by the default `dt`.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(self.dt);
    }

    /// Advance by an explicit step size (already validated by the caller).
    #[inline]
    pub fn advance_by(&mut self, dt: f64) {
        self.step += 1;
        self.time += dt;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} (t = {:.3})", self.step, self.time)
    }
}

/// Reject zero, negative, and non-finite step sizes.
pub fn validate_dt(dt: f64) -> McResult<()> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(McError::InvalidInput(format!(
            "time step must be positive and finite, got {dt}"
        )))
    }
}
