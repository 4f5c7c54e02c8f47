//! Unit tests for mc-core primitives.

#[cfg(test)]
mod geo {
    use crate::{BoundaryBox, Interval, Vec2};

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
    }

    #[test]
    fn from_polar_length() {
        let v = Vec2::from_polar(2.0, 1.234);
        assert!((v.length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn inverted_interval_rejected() {
        assert!(Interval::new(1.0, 1.0).unwrap_err().is_invalid_input());
        assert!(Interval::new(2.0, 1.0).unwrap_err().is_invalid_input());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn box_contains_edges() {
        let b = BoundaryBox::new(0.0, 10.0, -5.0, 5.0).unwrap();
        assert!(b.contains(Vec2::new(0.0, -5.0)));
        assert!(b.contains(Vec2::new(10.0, 5.0)));
        assert!(!b.contains(Vec2::new(10.1, 0.0)));
    }

    #[test]
    fn spawn_range_clipped_to_box() {
        let spawn = BoundaryBox::new(-700.0, 100.0, -50.0, 900.0).unwrap();
        let sim = BoundaryBox::centered_square(600.0).unwrap();
        let clipped = spawn.intersect(&sim).unwrap();
        assert_eq!(clipped, BoundaryBox::new(-600.0, 100.0, -50.0, 600.0).unwrap());
    }

    #[test]
    fn disjoint_spawn_range_errors() {
        let spawn = BoundaryBox::new(700.0, 800.0, 0.0, 1.0).unwrap();
        let sim = BoundaryBox::centered_square(600.0).unwrap();
        assert!(spawn.intersect(&sim).is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::SimClock;

    #[test]
    fn clock_accumulates_dt() {
        let mut clock = SimClock::new(0.5).unwrap();
        assert_eq!(clock.time, 0.0);
        clock.advance();
        assert_eq!(clock.step, 1);
        assert_eq!(clock.time, 0.5);
        clock.advance_by(0.25);
        assert_eq!(clock.step, 2);
        assert_eq!(clock.time, 0.75);
    }

    #[test]
    fn bad_dt_rejected() {
        assert!(SimClock::new(0.0).is_err());
        assert!(SimClock::new(-1.0).is_err());
        assert!(SimClock::new(f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = SimRng::new(1).random();
        let b: u64 = SimRng::new(2).random();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
        }
    }

    #[test]
    fn degenerate_uniform_returns_lo() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform(5.0, 5.0), 5.0);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn gen_range_stays_in_range() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let k: usize = rng.gen_range(2..7);
            assert!((2..7).contains(&k));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(9);
        let a: u64 = root.child(0).random();
        let b: u64 = root.child(1).random();
        assert_ne!(a, b);
    }
}

#[cfg(test)]
mod truncnorm {
    use crate::{DurationSpec, SimRng, TruncatedNormal};

    #[test]
    fn samples_respect_lower_bound() {
        let dist = TruncatedNormal::non_negative(0.25, 0.5).unwrap();
        let mut rng = SimRng::new(7);
        for v in rng.sample_vec(&dist, 5_000) {
            assert!(v >= 0.0, "got {v}");
        }
    }

    #[test]
    fn deep_tail_bound_uses_exponential_proposal() {
        // Bound sits 6 standard deviations above the mean.
        let dist = TruncatedNormal::new(0.0, 1.0, 6.0).unwrap();
        let mut rng = SimRng::new(3);
        let draws = rng.sample_vec(&dist, 2_000);
        assert!(draws.iter().all(|&v| v >= 6.0));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        // E[Z | Z >= 6] ≈ 6.158
        assert!((mean - 6.158).abs() < 0.05, "mean {mean}");
    }

    #[test]
    fn mild_truncation_mean_shift() {
        // N(840, 240²) truncated at 0 is essentially untruncated.
        let dist = DurationSpec::new(840.0, 240.0).distribution().unwrap();
        let mut rng = SimRng::new(11);
        let draws = rng.sample_vec(&dist, 20_000);
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 840.0).abs() < 10.0, "mean {mean}");
    }

    #[test]
    fn half_normal_at_zero_mean() {
        // mean 0 ⇒ half-normal with E = std·√(2/π).
        let dist = TruncatedNormal::non_negative(0.0, 1.0).unwrap();
        let mut rng = SimRng::new(5);
        let draws = rng.sample_vec(&dist, 20_000);
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 0.7979).abs() < 0.03, "mean {mean}");
    }

    #[test]
    fn zero_std_is_point_mass() {
        let mut rng = SimRng::new(0);
        let at_mean = TruncatedNormal::non_negative(3.0, 0.0).unwrap();
        assert_eq!(rng.sample(&at_mean), 3.0);
        let floored = TruncatedNormal::non_negative(-3.0, 0.0).unwrap();
        assert_eq!(rng.sample(&floored), 0.0);
    }

    #[test]
    fn negative_std_rejected() {
        let err = TruncatedNormal::non_negative(1.0, -0.1).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
