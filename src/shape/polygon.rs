use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Ring;
use crate::utils::RingPointLocation;
use alloc::vec::Vec;

/// A planar polygon with an exterior ring and zero or more holes.
///
/// Each hole is assumed to lie strictly inside the exterior ring and not to overlap the other
/// holes. The orientation of the input rings is free: the split engine normalizes it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon from its exterior ring and its holes.
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Creates an empty polygon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The exterior ring of this polygon.
    #[inline]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// The holes of this polygon.
    #[inline]
    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }

    /// The exterior ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        core::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Is the exterior ring of this polygon empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// The area of this polygon, i.e., the area of the exterior ring minus the area of its holes.
    pub fn area(&self) -> Real {
        self.exterior.area() - self.interiors.iter().map(|h| h.area()).sum::<Real>()
    }

    /// The total length of the boundary of this polygon.
    pub fn perimeter(&self) -> Real {
        self.rings()
            .flat_map(|r| r.segments())
            .map(|s| s.length())
            .sum()
    }

    /// Applies the isometry `m` to every ring of this polygon.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            self.exterior.transformed(m),
            self.interiors.iter().map(|h| h.transformed(m)).collect(),
        )
    }

    /// The bounding box of this polygon.
    pub fn local_aabb(&self) -> Aabb {
        self.exterior.local_aabb()
    }

    /// Locates `pt` with respect to the area covered by this polygon.
    ///
    /// Points inside a hole are outside the polygon; points on the boundary of a hole are on the
    /// polygon boundary.
    pub fn locate_point(&self, pt: &Point<Real>, epsilon: Real) -> RingPointLocation {
        match self.exterior.locate_point(pt, epsilon) {
            RingPointLocation::Inside => {}
            other => return other,
        }

        for hole in &self.interiors {
            match hole.locate_point(pt, epsilon) {
                RingPointLocation::Inside => return RingPointLocation::Outside,
                RingPointLocation::OnBoundary => return RingPointLocation::OnBoundary,
                RingPointLocation::Outside => {}
            }
        }

        RingPointLocation::Inside
    }
}
