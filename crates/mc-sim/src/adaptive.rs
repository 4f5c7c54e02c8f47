//! Self-adaptive time step.

use tracing::info;

use mc_core::{McResult, validate_dt};
use mc_infection::MaskProtection;
use mc_population::SpeedRange;

/// Shrink `dt` when an average mover would cross more than one effective
/// infection radius per step.
///
/// With `v = (min + max) / 2` and `r = radius / mask`: if `v·dt > r` the step
/// becomes `dt' = r / (2v)` and the step count grows to
/// `floor(dt·steps / dt') + 1` so the simulated span is at least as long.
/// Otherwise `(dt, steps)` is returned unchanged.
pub fn adapt_time_step(
    dt:     f64,
    steps:  u64,
    speed:  &SpeedRange,
    radius: f64,
    mask:   MaskProtection,
) -> McResult<(f64, u64)> {
    validate_dt(dt)?;
    speed.validate()?;

    let v_avg = speed.mean();
    let r = mask.effective_radius(radius);
    if v_avg * dt <= r {
        return Ok((dt, steps));
    }

    let new_dt = 0.5 * r / v_avg;
    let new_steps = (dt * steps as f64 / new_dt).floor() as u64 + 1;
    info!(old_dt = dt, new_dt, old_steps = steps, new_steps, "time step adapted");
    Ok((new_dt, new_steps))
}
