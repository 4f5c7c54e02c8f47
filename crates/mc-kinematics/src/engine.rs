//! Whole-cohort kinematics step.

use tracing::{debug, warn};

use mc_core::{BoundaryBox, McError, McResult, Vec2, validate_dt};

use crate::reflect_axis;

/// Moves individuals in straight lines inside a fixed box, bouncing them
/// elastically off the walls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinematics {
    bounds: BoundaryBox,
}

impl Kinematics {
    pub fn new(bounds: BoundaryBox) -> McResult<Self> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    #[inline]
    pub fn bounds(&self) -> &BoundaryBox {
        &self.bounds
    }

    /// Largest `dt` for which an individual moving at `max_speed` can cross
    /// at most one wall per axis in a single step.
    ///
    /// Returns `f64::INFINITY` for a stationary population.
    pub fn max_safe_dt(&self, max_speed: f64) -> f64 {
        if max_speed <= 0.0 {
            return f64::INFINITY;
        }
        self.bounds.width().min(self.bounds.height()) / max_speed
    }

    /// Advance every `(position, velocity)` pair by `dt` in place.
    ///
    /// Returns the total number of wall crossings.
    ///
    /// # Errors
    ///
    /// `InvalidInput` (raised before anything moves) when `dt` is not
    /// positive and finite, the two slices differ in length, or any
    /// coordinate is non-finite.
    pub fn step(&self, positions: &mut [Vec2], velocities: &mut [Vec2], dt: f64) -> McResult<u64> {
        validate_dt(dt)?;
        if positions.len() != velocities.len() {
            return Err(McError::InvalidInput(format!(
                "kinematics needs one velocity per position, got {} positions and {} velocities",
                positions.len(),
                velocities.len()
            )));
        }
        if let Some(i) = positions
            .iter()
            .zip(velocities.iter())
            .position(|(p, v)| !p.is_finite() || !v.is_finite())
        {
            return Err(McError::InvalidInput(format!(
                "non-finite position or velocity at index {i}"
            )));
        }

        let max_speed = velocities.iter().map(|v| v.length()).fold(0.0, f64::max);
        if dt > self.max_safe_dt(max_speed) {
            warn!(
                dt,
                max_speed,
                safe_dt = self.max_safe_dt(max_speed),
                "step size allows multiple wall crossings per step",
            );
        }

        let mut crossings = 0u64;
        for (p, v) in positions.iter_mut().zip(velocities.iter_mut()) {
            let (x, vx, cx) = reflect_axis(p.x + v.x * dt, v.x, self.bounds.x);
            let (y, vy, cy) = reflect_axis(p.y + v.y * dt, v.y, self.bounds.y);
            *p = Vec2::new(x, y);
            *v = Vec2::new(vx, vy);
            crossings += u64::from(cx) + u64::from(cy);
        }

        debug!(n = positions.len(), dt, crossings, "kinematics step");
        Ok(crossings)
    }
}
