//! Unit tests for mc-infection.

use mc_core::{SimRng, Vec2};
use mc_population::Cohort;

use crate::{
    ExposureContext, ExposureModel, InfectionSpec, MaskProtection, NoExposure, ProximitySampler,
    exposure_window,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Exposure threshold fixed at zero: anyone inside the radius for a positive
/// time is infected.
fn certain_sampler(radius: f64) -> ProximitySampler {
    ProximitySampler::new(InfectionSpec::new(radius, 0.0, 0.0).unwrap()).unwrap()
}

/// Threshold fixed far above any step length: nobody is ever infected.
fn impossible_sampler(radius: f64) -> ProximitySampler {
    ProximitySampler::new(InfectionSpec::new(radius, 1.0e9, 0.0).unwrap()).unwrap()
}

fn stationary(points: &[(f64, f64)]) -> Cohort {
    let mut c = Cohort::new();
    for &(x, y) in points {
        c.push(Vec2::new(x, y), Vec2::ZERO);
    }
    c
}

// ── Spec & mask ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod spec {
    use super::*;

    #[test]
    fn mask_below_one_rejected() {
        let err = MaskProtection::new(0.5).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(MaskProtection::from_option(Some(f64::NAN)).is_err());
        assert_eq!(MaskProtection::from_option(None).unwrap(), MaskProtection::NONE);
    }

    #[test]
    fn mask_shrinks_radius() {
        assert_eq!(MaskProtection::new(2.0).unwrap().effective_radius(1.0), 0.5);
        assert_eq!(MaskProtection::NONE.effective_radius(3.0), 3.0);
    }

    #[test]
    fn bad_radius_rejected() {
        assert!(InfectionSpec::new(0.0, 0.25, 0.5).unwrap_err().is_invalid_parameter());
        assert!(InfectionSpec::new(1.0, 0.25, -0.5).is_err());
    }

    #[test]
    fn exposure_window_caps_at_dt() {
        assert_eq!(exposure_window(0.0, 1.0, 0.5), 0.5);
        assert_eq!(exposure_window(4.0, 1.0, 0.5), 0.25);
        assert_eq!(exposure_window(1.0, 1.0, 0.5), 0.5);
    }
}

// ── ProximitySampler ──────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use super::*;

    #[test]
    fn strictly_inside_radius_only() {
        let healthy = stationary(&[(0.5, 0.0), (1.0, 0.0), (0.0, -0.99), (3.0, 3.0)]);
        let got = certain_sampler(1.0)
            .sample(&[Vec2::ZERO], &healthy, 0.5, None, &mut SimRng::new(1))
            .unwrap();
        // Exactly on the radius is not exposed.
        assert_eq!(got, vec![0, 2]);
    }

    #[test]
    fn mask_two_halves_radius() {
        let healthy = stationary(&[(0.4, 0.0), (0.6, 0.0)]);
        let sampler = certain_sampler(1.0);
        let no_mask = sampler.sample(&[Vec2::ZERO], &healthy, 0.5, None, &mut SimRng::new(1));
        let masked = sampler.sample(&[Vec2::ZERO], &healthy, 0.5, Some(2.0), &mut SimRng::new(1));
        assert_eq!(no_mask.unwrap(), vec![0, 1]);
        assert_eq!(masked.unwrap(), vec![0]);
    }

    #[test]
    fn mask_validated_before_sampling() {
        let healthy = stationary(&[(0.1, 0.0)]);
        let err = certain_sampler(1.0)
            .sample(&[Vec2::ZERO], &healthy, 0.5, Some(0.5), &mut SimRng::new(1))
            .unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn high_threshold_infects_nobody() {
        let healthy = stationary(&[(0.1, 0.0), (0.2, 0.0)]);
        let got = impossible_sampler(1.0)
            .sample(&[Vec2::ZERO], &healthy, 0.5, None, &mut SimRng::new(1))
            .unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn result_sorted_and_unique_with_overlapping_ill() {
        let healthy = stationary(&[(5.0, 0.0), (0.0, 0.0), (2.5, 0.0), (10.0, 10.0)]);
        let ill = [Vec2::new(0.5, 0.0), Vec2::new(4.5, 0.0), Vec2::new(2.5, 0.5)];
        let got = certain_sampler(3.0)
            .sample(&ill, &healthy, 1.0, None, &mut SimRng::new(4))
            .unwrap();
        assert_eq!(got, vec![0, 1, 2]);
    }

    #[test]
    fn empty_cohorts_give_nothing() {
        let sampler = certain_sampler(1.0);
        let mut rng = SimRng::new(0);
        assert!(sampler.sample(&[], &stationary(&[(0.0, 0.0)]), 1.0, None, &mut rng).unwrap().is_empty());
        assert!(sampler.sample(&[Vec2::ZERO], &Cohort::new(), 1.0, None, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn one_draw_per_exposure() {
        // Two ill neighbours of one healthy individual: two draws consumed.
        let healthy = stationary(&[(0.0, 0.0)]);
        let ill = [Vec2::new(0.1, 0.0), Vec2::new(-0.1, 0.0)];
        let sampler = ProximitySampler::new(InfectionSpec::new(1.0, 0.25, 0.5).unwrap()).unwrap();

        let mut rng = SimRng::new(21);
        sampler.sample(&ill, &healthy, 0.5, None, &mut rng).unwrap();
        let after: u64 = rng.random();

        let mut reference = SimRng::new(21);
        let dist = sampler.spec().exposure.distribution().unwrap();
        let _: f64 = reference.sample(&dist);
        let _: f64 = reference.sample(&dist);
        assert_eq!(after, reference.random::<u64>());
    }

    #[test]
    fn later_miss_does_not_cancel_earlier_hit() {
        // One stationary healthy individual between two ill: t_pass = dt = 0.5.
        let healthy = stationary(&[(0.0, 0.0)]);
        let ill = [Vec2::new(0.1, 0.0), Vec2::new(-0.1, 0.0)];
        let dt = 0.5;
        let sampler = ProximitySampler::new(InfectionSpec::new(1.0, 0.25, 0.5).unwrap()).unwrap();
        let dist = sampler.spec().exposure.distribution().unwrap();

        // Seeds whose first draw infects and second does not, and the reverse.
        let draws = |seed: u64| {
            let mut reference = SimRng::new(seed);
            let first: f64 = reference.sample(&dist);
            let second: f64 = reference.sample(&dist);
            (dt > first, dt > second)
        };
        let hit_then_miss = (0..10_000u64).find(|&s| draws(s) == (true, false)).expect("seed");
        let miss_then_hit = (0..10_000u64).find(|&s| draws(s) == (false, true)).expect("seed");

        for seed in [hit_then_miss, miss_then_hit] {
            let got = sampler.sample(&ill, &healthy, dt, None, &mut SimRng::new(seed)).unwrap();
            assert_eq!(got, vec![0], "seed {seed}");
        }

        let miss_twice = (0..10_000u64).find(|&s| draws(s) == (false, false)).expect("seed");
        let got = sampler.sample(&ill, &healthy, dt, None, &mut SimRng::new(miss_twice)).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn fast_movers_escape_slow_thresholds() {
        // t_pass = 1 / 100 = 0.01, threshold fixed at 0.1: no infection.
        let mut healthy = Cohort::new();
        healthy.push(Vec2::new(0.2, 0.0), Vec2::new(100.0, 0.0));
        let sampler = ProximitySampler::new(InfectionSpec::new(1.0, 0.1, 0.0).unwrap()).unwrap();
        let got = sampler.sample(&[Vec2::ZERO], &healthy, 0.5, None, &mut SimRng::new(0)).unwrap();
        assert!(got.is_empty());

        // A stationary neighbour stays the whole step (0.5 > 0.1).
        let got = sampler
            .sample(&[Vec2::ZERO], &stationary(&[(0.2, 0.0)]), 0.5, None, &mut SimRng::new(0))
            .unwrap();
        assert_eq!(got, vec![0]);
    }
}

// ── NoExposure ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod noop {
    use super::*;

    #[test]
    fn never_infects() {
        let healthy = stationary(&[(0.0, 0.0)]);
        let ill = [Vec2::ZERO];
        let ctx = ExposureContext::new(&ill, &healthy, 1.0, MaskProtection::NONE);
        assert!(NoExposure.infected(&ctx, &mut SimRng::new(0)).unwrap().is_empty());
    }

    #[test]
    fn boxed_model_dispatches() {
        let model: Box<dyn ExposureModel> = Box::new(certain_sampler(1.0));
        let healthy = stationary(&[(0.1, 0.0)]);
        let ill = [Vec2::ZERO];
        let ctx = ExposureContext::new(&ill, &healthy, 1.0, MaskProtection::NONE);
        assert_eq!(model.infected(&ctx, &mut SimRng::new(0)).unwrap(), vec![0]);
    }
}
