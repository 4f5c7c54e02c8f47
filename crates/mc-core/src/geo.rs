//! Planar geometry: points/vectors, axis intervals, and the simulation box.
//!
//! Everything is `f64`: positions are accumulated over thousands of steps and
//! reflected against box edges, so single precision would drift visibly.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::{McError, McResult};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2D position or velocity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of magnitude `r` pointing at angle `theta` (radians).
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self { x: r * theta.cos(), y: r * theta.sin() }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f64 {
        (self - other).length_squared()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Interval ──────────────────────────────────────────────────────────────────

/// A closed interval `[min, max]` on one axis with `min < max`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Build an interval, rejecting `min >= max` and non-finite bounds.
    pub fn new(min: f64, max: f64) -> McResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(McError::InvalidInput(format!(
                "interval bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(McError::InvalidInput(format!(
                "interval requires min < max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Overlap of two intervals; `InvalidInput` if they are disjoint.
    pub fn intersect(self, other: Interval) -> McResult<Interval> {
        Interval::new(self.min.max(other.min), self.max.min(other.max))
    }
}

// ── BoundaryBox ───────────────────────────────────────────────────────────────

/// Axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`.
///
/// Used both as the simulation domain (positions are reflected back into it)
/// and as the spawn rectangle for initial positions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryBox {
    pub x: Interval,
    pub y: Interval,
}

impl BoundaryBox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> McResult<Self> {
        Ok(Self {
            x: Interval::new(xmin, xmax)?,
            y: Interval::new(ymin, ymax)?,
        })
    }

    /// Square box `[-half, half]²` centred on the origin.
    pub fn centered_square(half: f64) -> McResult<Self> {
        Self::new(-half, half, -half, half)
    }

    /// Re-check the invariants (useful after deserialising a config).
    pub fn validate(&self) -> McResult<()> {
        Interval::new(self.x.min, self.x.max)?;
        Interval::new(self.y.min, self.y.max)?;
        Ok(())
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x.width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y.width()
    }

    /// Clip `self` to `outer`.  Spawn ranges reaching past the simulation box
    /// are chopped to it; a range entirely outside is an error.
    pub fn intersect(&self, outer: &BoundaryBox) -> McResult<BoundaryBox> {
        Ok(BoundaryBox {
            x: self.x.intersect(outer.x)?,
            y: self.y.intersect(outer.y)?,
        })
    }
}

impl fmt::Display for BoundaryBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x.min, self.x.max, self.y.min, self.y.max
        )
    }
}
