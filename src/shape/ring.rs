use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::{LineString, Segment};
use crate::utils::{self, RingPointLocation};
use alloc::vec::Vec;

/// A closed line string used as the boundary of a polygon.
///
/// The last point is always equal to the first one: [`Ring::new`] closes the given sequence if
/// needed. A valid ring has at least four coordinates and does not self-intersect.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ring {
    points: Vec<Point<Real>>,
}

impl Ring {
    /// Creates a ring from its vertices, appending the first vertex at the end if the
    /// sequence is not closed yet.
    pub fn new(mut points: Vec<Point<Real>>) -> Self {
        if let (Some(first), Some(last)) = (points.first().copied(), points.last()) {
            if first != *last {
                points.push(first);
            }
        }

        Self { points }
    }

    /// The vertices of this ring, including the repeated closing vertex.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Consumes this ring and returns its vertices.
    #[inline]
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }

    /// The number of coordinates of this ring, including the closing one.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this ring have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of edges of this ring.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// An iterator through the edges of this ring.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// The signed area enclosed by this ring, positive if it is counter-clockwise.
    pub fn signed_area(&self) -> Real {
        utils::signed_area(&self.points)
    }

    /// The area enclosed by this ring.
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// Is this ring oriented counter-clockwise?
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// A copy of this ring with its orientation reversed.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// A copy of this ring oriented counter-clockwise if `ccw` is `true`, clockwise otherwise.
    pub fn oriented(&self, ccw: bool) -> Self {
        if self.is_ccw() == ccw {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Applies the isometry `m` to the vertices of this ring.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self {
            points: self.points.iter().map(|pt| m * pt).collect(),
        }
    }

    /// The bounding box of this ring.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.points.iter().copied())
    }

    /// Locates `pt` with respect to the area enclosed by this ring.
    pub fn locate_point(&self, pt: &Point<Real>, epsilon: Real) -> RingPointLocation {
        utils::locate_point_in_ring(pt, &self.points, epsilon)
    }

    /// This ring seen as a closed line string.
    pub fn to_line_string(&self) -> LineString {
        LineString::new(self.points.clone())
    }
}

impl From<Vec<Point<Real>>> for Ring {
    fn from(points: Vec<Point<Real>>) -> Self {
        Self::new(points)
    }
}
