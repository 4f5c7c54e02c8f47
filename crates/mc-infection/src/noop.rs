//! An exposure model under which nobody is ever infected.

use mc_core::{McResult, SimRng};

use crate::{ExposureContext, ExposureModel};

/// An [`ExposureModel`] that never infects anyone.
///
/// Useful in tests that exercise outcomes and kinematics in isolation, or to
/// watch an existing outbreak burn out.
pub struct NoExposure;

impl ExposureModel for NoExposure {
    fn infected(&self, _ctx: &ExposureContext<'_>, _rng: &mut SimRng) -> McResult<Vec<usize>> {
        Ok(Vec::new())
    }
}
