use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Segment;
use alloc::vec::Vec;

/// An ordered sequence of points connected by straight segments.
///
/// A non-empty line string has at least two points. Its direction is significant: reversing it
/// swaps which half of a trim is on the left of the cutting line.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LineString {
    points: Vec<Point<Real>>,
}

impl LineString {
    /// Creates a new line string from its vertices.
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Self { points }
    }

    /// Creates an empty line string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The vertices of this line string.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Consumes this line string and returns its vertices.
    #[inline]
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }

    /// The number of vertices of this line string.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this line string have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Is the last vertex equal to the first one?
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// The number of segments forming this line string.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The `i`-th segment of this line string.
    #[inline]
    pub fn segment(&self, i: usize) -> Segment {
        Segment::new(self.points[i], self.points[i + 1])
    }

    /// An iterator through all the segments of this line string.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// The total length of this line string.
    pub fn length(&self) -> Real {
        self.segments().map(|s| s.length()).sum()
    }

    /// Reverses the direction of this line string.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// A copy of this line string with the reversed direction.
    pub fn reversed(&self) -> Self {
        let mut result = self.clone();
        result.reverse();
        result
    }

    /// Applies the isometry `m` to the vertices of this line string.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self::new(self.points.iter().map(|pt| m * pt).collect())
    }

    /// The bounding box of this line string.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.points.iter().copied())
    }

    /// Are all the coordinates of this line string finite?
    pub fn has_finite_coordinates(&self) -> bool {
        self.points
            .iter()
            .all(|pt| pt.x.is_finite() && pt.y.is_finite())
    }

    /// The point at the curve parameter `param`.
    ///
    /// The integer part of `param` is a segment index and its fractional part the position
    /// along that segment, so that `param == i` designates the `i`-th vertex.
    pub fn point_at_parameter(&self, param: Real) -> Point<Real> {
        let nsegs = self.num_segments();
        if nsegs == 0 {
            return self.points[0];
        }

        let i = (param.floor() as usize).min(nsegs - 1);
        let t = param - i as Real;
        let seg = self.segment(i);
        seg.a + seg.scaled_direction() * t
    }
}

impl From<Vec<Point<Real>>> for LineString {
    fn from(points: Vec<Point<Real>>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point<Real>> for LineString {
    fn from_iter<I: IntoIterator<Item = Point<Real>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
