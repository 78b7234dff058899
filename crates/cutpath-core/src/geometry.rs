//! Geometry primitives: points, line segments and cubic Bézier curves.
//!
//! World space is measured in meters with +Y pointing up. Evaluation is
//! pure; parameters outside `[0, 1]` extrapolate instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or offset) in world space.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Affine interpolation `(1 - t) * self + t * other`.
    pub fn lerp(&self, other: &Point2, t: f64) -> Point2 {
        *self * (1.0 - t) + *other * t
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (f64, f64) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: f64) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Straight segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Point at parameter `t`; `t = 0` is `start`, `t = 1` is `end`.
    pub fn point_on(&self, t: f64) -> Point2 {
        self.start.lerp(&self.end, t)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Cubic Bézier curve in Bernstein form.
///
/// Coincident control points are legal and collapse the curve locally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Point at parameter `t`; `t = 0` is `p0`, `t = 1` is `p3`.
    pub fn point_on(&self, t: f64) -> Point2 {
        let o = 1.0 - t;
        let c0 = o * o * o;
        let c1 = 3.0 * t * o * o;
        let c2 = 3.0 * t * t * o;
        let c3 = t * t * t;
        Point2::new(
            c0 * self.p0.x + c1 * self.p1.x + c2 * self.p2.x + c3 * self.p3.x,
            c0 * self.p0.y + c1 * self.p1.y + c2 * self.p2.y + c3 * self.p3.y,
        )
    }

    /// Distance between the curve's end points.
    pub fn chord_length(&self) -> f64 {
        self.p0.distance_to(&self.p3)
    }
}

/// Evaluates `f` at `steps + 1` evenly spaced parameters from 0 to 1 inclusive.
///
/// `steps == 0` yields the single point at `t = 0`.
pub fn sample<F>(steps: usize, f: F) -> impl Iterator<Item = Point2>
where
    F: Fn(f64) -> Point2,
{
    (0..=steps).map(move |i| {
        if steps == 0 {
            f(0.0)
        } else {
            f(i as f64 / steps as f64)
        }
    })
}
