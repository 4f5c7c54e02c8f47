//! One vectorised Metropolis-Hastings sweep.

use mc_core::{McError, McResult, SimRng};

use crate::{NeighborWindow, SpinGrid, neighbor_energy};

/// Model constants for a sweep.
///
/// - `j`: coupling; positive is ferromagnetic, negative anti-ferromagnetic.
/// - `h`: external field; positive favours up spins.
/// - `beta`: inverse temperature, must be `>= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coupling {
    pub j:    f64,
    pub h:    f64,
    pub beta: f64,
}

impl Coupling {
    pub fn new(j: f64, h: f64, beta: f64) -> McResult<Self> {
        let c = Self { j, h, beta };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> McResult<()> {
        if !self.j.is_finite() || !self.h.is_finite() {
            return Err(McError::InvalidParameter(format!(
                "coupling and field must be finite, got j={}, h={}",
                self.j, self.h
            )));
        }
        if self.beta.is_nan() || self.beta < 0.0 {
            return Err(McError::InvalidParameter(format!(
                "beta must be non-negative, got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

/// Apply one sweep to `grid` in place and return the number of flipped cells.
///
/// Every cell's decision is taken against the same energy evaluation:
/// `ΔE = -2E`, cells with `ΔE < 0` flip, cells with `ΔE >= 0` flip when a
/// fresh uniform draw falls below `exp(-β ΔE)`.  Draws are consumed in
/// row-major order, one per `ΔE >= 0` cell, so the sweep is deterministic
/// for a given RNG state.
///
/// # Errors
/// `InvalidParameter` if `beta < 0` (checked before any draw).
pub fn metropolis_sweep(
    grid:     &mut SpinGrid,
    coupling: &Coupling,
    window:   &NeighborWindow,
    rng:      &mut SimRng,
) -> McResult<usize> {
    coupling.validate()?;

    let energy = neighbor_energy(grid, coupling.j, coupling.h, window);
    let mut flips = 0usize;

    for (idx, &e) in energy.as_slice().iter().enumerate() {
        let delta = -2.0 * e;
        let flip = if delta < 0.0 {
            true
        } else {
            let u: f64 = rng.random();
            u < (-coupling.beta * delta).exp()
        };
        if flip {
            grid.flip_index(idx);
            flips += 1;
        }
    }

    Ok(flips)
}
