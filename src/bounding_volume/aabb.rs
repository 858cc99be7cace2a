//! Axis-aligned bounding boxes.

use crate::math::{Point, Real, Vector};

/// An axis-aligned box enclosing a set of points.
///
/// The split engine only uses it as a broad-phase filter: two segments, or a segment and a
/// whole curve, are only tested for intersection when their loosened boxes overlap.
///
/// # Example
///
/// ```
/// use cleave2d::bounding_volume::Aabb;
/// use cleave2d::math::Point;
///
/// let aabb = Aabb::from_points([Point::new(1.0, 2.0), Point::new(-1.0, 4.0)]);
/// assert_eq!(aabb.mins, Point::new(-1.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0));
/// assert!(aabb.intersects(&Aabb::new(Point::new(0.0, 3.0), Point::new(5.0, 5.0))));
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// The corner with the smallest coordinates.
    pub mins: Point<Real>,
    /// The corner with the largest coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// A box enclosing nothing, which any point added with [`Self::take_point`] replaces.
    #[inline]
    pub fn empty() -> Self {
        Self::new(
            Point::from(Vector::repeat(Real::MAX)),
            Point::from(Vector::repeat(-Real::MAX)),
        )
    }

    /// The smallest box enclosing every point of `pts`.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        pts.into_iter().fold(Self::empty(), |mut aabb, pt| {
            aabb.take_point(pt);
            aabb
        })
    }

    /// Grows this box so that it encloses `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Do both boxes share at least one point?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && other.mins.x <= self.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.y <= self.maxs.y
    }

    /// This box grown by `margin` in every direction.
    #[inline]
    pub fn loosened(&self, margin: Real) -> Aabb {
        let margin = Vector::repeat(margin.max(0.0));
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}
