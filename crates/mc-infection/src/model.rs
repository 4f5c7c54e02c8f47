//! The `ExposureModel` trait: who gets infected this step.

use mc_core::{McResult, SimRng};

use crate::ExposureContext;

/// Decides which healthy individuals fall ill during one step.
///
/// Implementations receive a read-only [`ExposureContext`] and the run's
/// single [`SimRng`]; every random draw goes through it so a seeded run is
/// reproducible.
///
/// # Contract
///
/// The returned indices point into `ctx.healthy`, are strictly ascending,
/// and contain no duplicates.
///
/// # Example
///
/// ```rust,ignore
/// struct EveryoneWithinOne;
///
/// impl ExposureModel for EveryoneWithinOne {
///     fn infected(&self, ctx: &ExposureContext<'_>, _rng: &mut SimRng) -> McResult<Vec<usize>> {
///         Ok((0..ctx.healthy.len())
///             .filter(|&i| {
///                 let p = ctx.healthy.positions[i];
///                 ctx.ill_positions.iter().any(|q| p.distance(*q) < 1.0)
///             })
///             .collect())
///     }
/// }
/// ```
pub trait ExposureModel: Send + Sync {
    fn infected(&self, ctx: &ExposureContext<'_>, rng: &mut SimRng) -> McResult<Vec<usize>>;
}

impl<M: ExposureModel + ?Sized> ExposureModel for Box<M> {
    fn infected(&self, ctx: &ExposureContext<'_>, rng: &mut SimRng) -> McResult<Vec<usize>> {
        (**self).infected(ctx, rng)
    }
}
