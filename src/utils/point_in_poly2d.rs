use crate::math::{Point, Real};
use crate::shape::Segment;

/// Location of a point relative to a closed ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RingPointLocation {
    /// The point is strictly inside the ring.
    Inside,
    /// The point lies on the ring, up to the tolerance.
    OnBoundary,
    /// The point is strictly outside the ring.
    Outside,
}

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using a crossing-number strategy.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge. An explicitly repeated closing point is allowed.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut inside = false;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];

        if (a.y > pt.y) != (b.y > pt.y) {
            let x = a.x + (pt.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if pt.x < x {
                inside = !inside;
            }
        }
    }

    inside
}

/// Locates `pt` with respect to the closed polygon `poly`, reporting points closer than
/// `epsilon` to one of its edges as [`RingPointLocation::OnBoundary`].
pub fn locate_point_in_ring(
    pt: &Point<Real>,
    poly: &[Point<Real>],
    epsilon: Real,
) -> RingPointLocation {
    if poly.is_empty() {
        return RingPointLocation::Outside;
    }

    let on_boundary = poly.iter().enumerate().any(|(i, a)| {
        let b = poly[(i + 1) % poly.len()];
        Segment::new(*a, b).distance_to_point(pt) <= epsilon
    });

    if on_boundary {
        RingPointLocation::OnBoundary
    } else if point_in_poly2d(pt, poly) {
        RingPointLocation::Inside
    } else {
        RingPointLocation::Outside
    }
}
