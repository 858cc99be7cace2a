//! Straight segments, the building blocks of line strings and rings.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};

/// A straight segment from `a` to `b`.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Segment {
    /// The start point.
    pub a: Point<Real>,
    /// The end point.
    pub b: Point<Real>,
}

/// Where a point lies on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// On the endpoint `a` (index `0`) or `b` (index `1`).
    OnVertex(u32),
    /// Strictly between the endpoints, with the weights `[1 - t, t]` of `a` and `b`.
    OnEdge([Real; 2]),
}

impl SegmentPointLocation {
    /// The position of this location along the segment, `0` at `a` and `1` at `b`.
    #[inline]
    pub fn parameter(&self) -> Real {
        match *self {
            SegmentPointLocation::OnVertex(i) => i.min(1) as Real,
            SegmentPointLocation::OnEdge([_, t]) => t,
        }
    }

    /// Is this location on one of the segment endpoints?
    #[inline]
    pub fn is_vertex(&self) -> bool {
        matches!(self, SegmentPointLocation::OnVertex(_))
    }
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The vector from `a` to `b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// This segment moved by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::new(m * self.a, m * self.b)
    }

    /// The bounding box of this segment.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(self.a.inf(&self.b), self.a.sup(&self.b))
    }

    /// The midpoint of this segment.
    #[inline]
    pub fn midpoint(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// The point designated by `location`.
    pub fn point_at(&self, location: &SegmentPointLocation) -> Point<Real> {
        match *location {
            SegmentPointLocation::OnVertex(0) => self.a,
            SegmentPointLocation::OnVertex(_) => self.b,
            SegmentPointLocation::OnEdge(bcoords) => self.a + self.scaled_direction() * bcoords[1],
        }
    }

    /// The parameter `t` in `[0, 1]` of the point of this segment closest to `pt`.
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        let dir = self.scaled_direction();
        let sq_len = dir.norm_squared();

        if sq_len == 0.0 {
            0.0
        } else {
            ((pt - self.a).dot(&dir) / sq_len).clamp(0.0, 1.0)
        }
    }

    /// The distance between `pt` and this segment.
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let t = self.project_parameter(pt);
        na::distance(&(self.a + self.scaled_direction() * t), pt)
    }

    /// The distance between `pt` and the infinite line supporting this segment.
    ///
    /// Falls back to the distance to `a` if the segment is degenerate.
    pub fn distance_to_line(&self, pt: &Point<Real>) -> Real {
        let dir = self.scaled_direction();
        let len = dir.norm();

        if len == 0.0 {
            na::distance(&self.a, pt)
        } else {
            dir.perp(&(pt - self.a)).abs() / len
        }
    }

    /// Locates the projection of `pt` on this segment, snapping to an endpoint when the
    /// projection lies closer than `epsilon` from it.
    pub fn locate_point(&self, pt: &Point<Real>, epsilon: Real) -> SegmentPointLocation {
        let t = self.project_parameter(pt);
        let len = self.length();

        if t * len <= epsilon {
            SegmentPointLocation::OnVertex(0)
        } else if (1.0 - t) * len <= epsilon {
            SegmentPointLocation::OnVertex(1)
        } else {
            SegmentPointLocation::OnEdge([1.0 - t, t])
        }
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
