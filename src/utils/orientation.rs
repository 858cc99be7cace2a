//! Orientation predicates and signed measures on planar point sequences.

use crate::math::{Point, Real, Vector};
use core::f64::consts::TAU;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise.
    CounterClockwise,
    /// Clockwise.
    Clockwise,
    /// Neither (the points are collinear up to the tolerance).
    Degenerate,
}

/// Returns the orientation of the triangle `p1, p2, p3`.
///
/// The triangle is considered degenerate if the distance from `p3` to the line through `p1` and
/// `p2` is smaller than `epsilon`.
///
/// Counter-clockwise example:
/// ```text
///           o p3
///         .
///       .
/// o p1 ---- o p2
/// ```
pub fn orientation2d(
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    epsilon: Real,
) -> Orientation {
    let base = p2 - p1;
    let cross = base.perp(&(p3 - p1));
    let len = base.norm();

    if cross.abs() <= epsilon * len || len == 0.0 {
        Orientation::Degenerate
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Twice the signed area of the closed polygon `points`, using the shoelace formula.
///
/// The first and last points are implicitly connected; an explicitly repeated closing point
/// adds nothing. The result is positive for counter-clockwise polygons.
pub fn double_signed_area(points: &[Point<Real>]) -> Real {
    if points.len() < 3 {
        return 0.0;
    }

    let origin = points[0];
    points
        .windows(2)
        .map(|w| (w[0] - origin).perp(&(w[1] - origin)))
        .sum()
}

/// The signed area of the closed polygon `points`, positive for counter-clockwise polygons.
#[inline]
pub fn signed_area(points: &[Point<Real>]) -> Real {
    double_signed_area(points) * 0.5
}

/// The counter-clockwise angle from `from` to `to`, in `[0, 2π)`.
pub fn ccw_angle(from: &Vector<Real>, to: &Vector<Real>) -> Real {
    let angle = from.perp(to).atan2(from.dot(to));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// The polar angle of `dir` in `[0, 2π)`, used to sort edges around a node.
#[inline]
pub fn pseudo_angle(dir: &Vector<Real>) -> Real {
    ccw_angle(&Vector::x(), dir)
}
