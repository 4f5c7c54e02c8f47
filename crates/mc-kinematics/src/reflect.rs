//! One-axis elastic reflection.

use mc_core::Interval;

/// Fold a free-flight coordinate back into `bounds`.
///
/// `next` is the unconstrained position `x + v·dt`.  Each wall crossing
/// mirrors the coordinate about that wall and negates the velocity.  Several
/// crossings in one step (possible when `|v|·dt` exceeds the box width) are
/// resolved in one shot: the result equals applying the single-wall rule
/// until the coordinate lands inside.
///
/// Returns the reflected coordinate, the resulting velocity, and the number
/// of walls crossed.
///
/// ```
/// use mc_core::Interval;
/// use mc_kinematics::reflect_axis;
///
/// let walls = Interval::new(0.0, 10.0).unwrap();
/// assert_eq!(reflect_axis(9.0 + 5.0, 5.0, walls), (6.0, -5.0, 1));
/// ```
pub fn reflect_axis(next: f64, velocity: f64, bounds: Interval) -> (f64, f64, u32) {
    if bounds.contains(next) {
        return (next, velocity, 0);
    }

    let width = bounds.width();
    let overshoot = if next > bounds.max { next - bounds.max } else { bounds.min - next };
    let crossings = (overshoot / width).ceil() as u32;

    // Position on the unfolded line, reduced modulo the 2w mirror period.
    let u = (next - bounds.min).rem_euclid(2.0 * width);
    let folded = if u <= width { bounds.min + u } else { bounds.min + 2.0 * width - u };

    let velocity = if crossings % 2 == 1 { -velocity } else { velocity };
    (folded.clamp(bounds.min, bounds.max), velocity, crossings)
}
