//! Unit tests for mc-kinematics.

use mc_core::{BoundaryBox, Interval, SimRng, Vec2};

use crate::{Kinematics, reflect_axis};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn unit_walls() -> Interval {
    Interval::new(0.0, 10.0).unwrap()
}

fn ten_box() -> Kinematics {
    Kinematics::new(BoundaryBox::new(0.0, 10.0, 0.0, 10.0).unwrap()).unwrap()
}

// ── reflect_axis ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reflect {
    use super::*;

    #[test]
    fn inside_is_untouched() {
        assert_eq!(reflect_axis(4.0, 2.0, unit_walls()), (4.0, 2.0, 0));
        // Landing exactly on a wall is not a crossing.
        assert_eq!(reflect_axis(10.0, 2.0, unit_walls()), (10.0, 2.0, 0));
    }

    #[test]
    fn upper_wall() {
        assert_eq!(reflect_axis(14.0, 5.0, unit_walls()), (6.0, -5.0, 1));
    }

    #[test]
    fn lower_wall() {
        assert_eq!(reflect_axis(-3.0, -4.0, unit_walls()), (3.0, 4.0, 1));
    }

    #[test]
    fn two_crossings_keep_direction() {
        // 25 → mirror at 10 → -5 → mirror at 0 → 5.
        assert_eq!(reflect_axis(25.0, 20.0, unit_walls()), (5.0, 20.0, 2));
    }

    #[test]
    fn many_crossings_stay_inside() {
        let (x, v, n) = reflect_axis(1234.5, 1.0, unit_walls());
        assert!((0.0..=10.0).contains(&x));
        assert_eq!(n, 123);
        assert_eq!(v, -1.0);
        assert!((x - 5.5).abs() < 1e-9);
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn reflection_example() {
        let k = ten_box();
        let mut pos = vec![Vec2::new(9.0, 5.0)];
        let mut vel = vec![Vec2::new(5.0, 0.0)];
        let crossings = k.step(&mut pos, &mut vel, 1.0).unwrap();
        assert_eq!(crossings, 1);
        assert_eq!(pos[0], Vec2::new(6.0, 5.0));
        assert_eq!(vel[0], Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn containment_and_speed_conserved() {
        let bounds = BoundaryBox::centered_square(20.0).unwrap();
        let k = Kinematics::new(bounds).unwrap();
        let mut rng = SimRng::new(17);
        let n = 300;
        let mut pos: Vec<Vec2> =
            (0..n).map(|_| Vec2::new(rng.uniform(-20.0, 20.0), rng.uniform(-20.0, 20.0))).collect();
        let mut vel: Vec<Vec2> = (0..n)
            .map(|_| Vec2::from_polar(rng.uniform(0.0, 30.0), rng.uniform(0.0, 6.28)))
            .collect();
        let speeds: Vec<f64> = vel.iter().map(|v| v.length()).collect();

        for _ in 0..50 {
            k.step(&mut pos, &mut vel, 0.5).unwrap();
            assert!(pos.iter().all(|&p| bounds.contains(p)));
        }
        for (v, s) in vel.iter().zip(&speeds) {
            assert!((v.length() - s).abs() < 1e-9);
        }
    }

    #[test]
    fn huge_step_still_contained() {
        let k = ten_box();
        let mut pos = vec![Vec2::new(1.0, 1.0)];
        let mut vel = vec![Vec2::new(1000.0, -333.0)];
        k.step(&mut pos, &mut vel, 7.3).unwrap();
        assert!(k.bounds().contains(pos[0]));
    }

    #[test]
    fn max_safe_dt_uses_narrow_side() {
        let k = Kinematics::new(BoundaryBox::new(0.0, 40.0, 0.0, 10.0).unwrap()).unwrap();
        assert_eq!(k.max_safe_dt(5.0), 2.0);
        assert_eq!(k.max_safe_dt(0.0), f64::INFINITY);
    }

    #[test]
    fn invalid_inputs_leave_state_untouched() {
        let k = ten_box();
        let mut pos = vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        let mut vel = vec![Vec2::new(1.0, 0.0)];
        assert!(k.step(&mut pos, &mut vel, 1.0).unwrap_err().is_invalid_input());

        let mut vel = vec![Vec2::new(1.0, 0.0), Vec2::new(f64::NAN, 0.0)];
        assert!(k.step(&mut pos, &mut vel, 1.0).is_err());
        assert!(k.step(&mut pos, &mut vel[..], 0.0).is_err());
        assert_eq!(pos[0], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn empty_columns_are_fine() {
        let k = ten_box();
        assert_eq!(k.step(&mut [], &mut [], 1.0).unwrap(), 0);
    }
}
