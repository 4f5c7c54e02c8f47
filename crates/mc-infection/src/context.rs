//! Read-only view of the population handed to an exposure model.

use mc_core::Vec2;
use mc_population::Cohort;

use crate::MaskProtection;

/// What an [`ExposureModel`][crate::ExposureModel] may look at during one
/// step.
///
/// Built by the step engine after the departing ill have been removed, so
/// `ill_positions` only contains individuals that are still infectious.
/// Nothing here can be mutated while the context is alive.
pub struct ExposureContext<'a> {
    pub ill_positions: &'a [Vec2],
    pub healthy:       &'a Cohort,
    pub dt:            f64,
    pub mask:          MaskProtection,
}

impl<'a> ExposureContext<'a> {
    #[inline]
    pub fn new(
        ill_positions: &'a [Vec2],
        healthy:       &'a Cohort,
        dt:            f64,
        mask:          MaskProtection,
    ) -> Self {
        Self { ill_positions, healthy, dt, mask }
    }
}
