//! Proximity/exposure-time infection sampler.
//!
//! For every ill individual, in index order, the healthy individuals strictly
//! closer than the effective radius are found through an R-tree of healthy
//! positions.  Each such neighbour draws a threshold `t_infect` and is
//! infected when its time inside the radius, `t_pass`, exceeds it.  A healthy
//! individual near several ill ones draws once per ill neighbour and is
//! infected if any of those draws succeeds.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use tracing::debug;

use mc_core::{McResult, SimRng, TruncatedNormal, Vec2};
use mc_population::Cohort;

use crate::{ExposureContext, ExposureModel, InfectionSpec, MaskProtection};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A healthy individual's position tagged with its cohort index.
#[derive(Clone)]
struct HealthyEntry {
    point: [f64; 2],
    index: usize,
}

impl RTreeObject for HealthyEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for HealthyEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Exposure window ───────────────────────────────────────────────────────────

/// Time a healthy individual moving at `speed` spends inside an infectious
/// radius during one step: `min(radius / speed, dt)`, or `dt` when stationary.
#[inline]
pub fn exposure_window(speed: f64, radius: f64, dt: f64) -> f64 {
    if speed > 0.0 { (radius / speed).min(dt) } else { dt }
}

// ── ProximitySampler ──────────────────────────────────────────────────────────

/// The default [`ExposureModel`].
pub struct ProximitySampler {
    spec:     InfectionSpec,
    exposure: TruncatedNormal,
}

impl ProximitySampler {
    pub fn new(spec: InfectionSpec) -> McResult<Self> {
        spec.validate()?;
        Ok(Self { exposure: spec.exposure.distribution()?, spec })
    }

    #[inline]
    pub fn spec(&self) -> &InfectionSpec {
        &self.spec
    }

    /// Convenience entry point taking the raw mask factor.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `mask` is present and below 1.
    pub fn sample(
        &self,
        ill_positions: &[Vec2],
        healthy:       &Cohort,
        dt:            f64,
        mask:          Option<f64>,
        rng:           &mut SimRng,
    ) -> McResult<Vec<usize>> {
        let mask = MaskProtection::from_option(mask)?;
        self.infected(&ExposureContext::new(ill_positions, healthy, dt, mask), rng)
    }
}

impl ExposureModel for ProximitySampler {
    fn infected(&self, ctx: &ExposureContext<'_>, rng: &mut SimRng) -> McResult<Vec<usize>> {
        let healthy = ctx.healthy;
        healthy.validate()?;
        if healthy.is_empty() || ctx.ill_positions.is_empty() {
            return Ok(Vec::new());
        }

        let r_eff = ctx.mask.effective_radius(self.spec.radius);
        let r_eff_2 = r_eff * r_eff;

        let tree = RTree::bulk_load(
            healthy
                .positions
                .iter()
                .enumerate()
                .map(|(index, p)| HealthyEntry { point: p.to_array(), index })
                .collect(),
        );

        let mut infected = vec![false; healthy.len()];
        let mut exposures = 0usize;
        let mut near: Vec<usize> = Vec::new();

        for ill in ctx.ill_positions {
            let centre = ill.to_array();
            near.clear();
            near.extend(
                tree.locate_within_distance(centre, r_eff_2)
                    .filter(|e| e.distance_2(&centre) < r_eff_2)
                    .map(|e| e.index),
            );
            near.sort_unstable();
            exposures += near.len();

            for &i in &near {
                let t_pass = exposure_window(healthy.velocities[i].length(), r_eff, ctx.dt);
                let t_infect = rng.sample(&self.exposure);
                if t_pass > t_infect {
                    infected[i] = true;
                }
            }
        }

        let out: Vec<usize> =
            infected.iter().enumerate().filter(|&(_, &hit)| hit).map(|(i, _)| i).collect();
        debug!(
            ill = ctx.ill_positions.len(),
            healthy = healthy.len(),
            r_eff,
            exposures,
            infected = out.len(),
            "exposure sampled",
        );
        Ok(out)
    }
}
