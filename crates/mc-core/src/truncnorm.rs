//! Lower-truncated normal distribution for time-to-event durations.
//!
//! Recovery times, death times, and required exposure times are all drawn
//! from `N(mean, std²)` conditioned on `X >= lower` (with `lower = 0` for
//! durations).  Sampling works in standardised units with the bound
//! `a = (lower - mean) / std`:
//!
//! - `a <= 0.5`: plain rejection from the standard normal.  The acceptance
//!   rate is at least `P(Z >= 0.5) ≈ 0.31`.
//! - `a > 0.5`: Robert's (1995) exponential proposal with rate
//!   `α = (a + √(a² + 4)) / 2`, which stays efficient however deep into the
//!   tail the bound sits.
//!
//! A zero standard deviation is treated as the point mass at
//! `max(mean, lower)`.

use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::{Exp1, StandardNormal};

use crate::{McError, McResult};

/// Standardised bound above which the exponential proposal is used.
const NAIVE_REJECTION_LIMIT: f64 = 0.5;

/// `N(mean, std²)` truncated to `[lower, ∞)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TruncatedNormal {
    mean:  f64,
    std:   f64,
    lower: f64,
    /// Standardised lower bound `(lower - mean) / std`; unused when `std == 0`.
    a:     f64,
}

impl TruncatedNormal {
    pub fn new(mean: f64, std: f64, lower: f64) -> McResult<Self> {
        if !mean.is_finite() || !lower.is_finite() {
            return Err(McError::InvalidParameter(format!(
                "truncated normal needs finite mean and bound, got mean={mean}, lower={lower}"
            )));
        }
        if !std.is_finite() || std < 0.0 {
            return Err(McError::InvalidParameter(format!(
                "standard deviation must be finite and >= 0, got {std}"
            )));
        }
        let a = if std > 0.0 { (lower - mean) / std } else { 0.0 };
        Ok(Self { mean, std, lower, a })
    }

    /// Truncated to non-negative values, the form used for every duration.
    pub fn non_negative(mean: f64, std: f64) -> McResult<Self> {
        Self::new(mean, std, 0.0)
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn std(&self) -> f64 {
        self.std
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    fn sample_standard<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let a = self.a;
        if a <= NAIVE_REJECTION_LIMIT {
            loop {
                let z: f64 = rng.sample(StandardNormal);
                if z >= a {
                    return z;
                }
            }
        }
        let alpha = 0.5 * (a + (a * a + 4.0).sqrt());
        loop {
            let e: f64 = rng.sample(Exp1);
            let z = a + e / alpha;
            let rho = (-0.5 * (z - alpha) * (z - alpha)).exp();
            if rng.r#gen::<f64>() <= rho {
                return z;
            }
        }
    }
}

impl Distribution<f64> for TruncatedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.std == 0.0 {
            return self.mean.max(self.lower);
        }
        // Rounding in `mean + std * z` can land a hair below the bound.
        (self.mean + self.std * self.sample_standard(rng)).max(self.lower)
    }
}

// ── DurationSpec ──────────────────────────────────────────────────────────────

/// Mean and standard deviation of a non-negative duration, e.g. the
/// recovery spec `(35 days, 10 days)` in hours.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationSpec {
    pub mean: f64,
    pub std:  f64,
}

impl DurationSpec {
    #[inline]
    pub const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// The sampling distribution `N(mean, std²)` truncated to `[0, ∞)`.
    pub fn distribution(&self) -> McResult<TruncatedNormal> {
        TruncatedNormal::non_negative(self.mean, self.std)
    }
}
