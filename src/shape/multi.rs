//! Multi-part geometries.

use crate::math::{Isometry, Real};
use crate::shape::{Geometry, LineString, Polygon};
use alloc::vec::Vec;
use core::ops::Deref;

/// An ordered set of polygons.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MultiPolygon(pub Vec<Polygon>);

/// An ordered set of line strings.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MultiLineString(pub Vec<LineString>);

/// An ordered set of geometries of any type.
///
/// This is the result type of the split operations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GeometryCollection(pub Vec<Geometry>);

macro_rules! impl_multi(
    ($Multi: ident, $Part: ident) => {
        impl $Multi {
            /// Creates a new multi-part geometry from its components.
            pub fn new(parts: Vec<$Part>) -> Self {
                Self(parts)
            }

            /// Consumes this geometry and returns its components.
            pub fn into_inner(self) -> Vec<$Part> {
                self.0
            }

            /// Is this geometry empty, i.e., are all its components empty?
            pub fn is_empty(&self) -> bool {
                self.0.iter().all(|part| part.is_empty())
            }
        }

        impl Deref for $Multi {
            type Target = [$Part];

            fn deref(&self) -> &[$Part] {
                &self.0
            }
        }

        impl From<Vec<$Part>> for $Multi {
            fn from(parts: Vec<$Part>) -> Self {
                Self(parts)
            }
        }

        impl FromIterator<$Part> for $Multi {
            fn from_iter<I: IntoIterator<Item = $Part>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $Multi {
            type Item = $Part;
            type IntoIter = alloc::vec::IntoIter<$Part>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $Multi {
            type Item = &'a $Part;
            type IntoIter = core::slice::Iter<'a, $Part>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    }
);

impl_multi!(MultiPolygon, Polygon);
impl_multi!(MultiLineString, LineString);
impl_multi!(GeometryCollection, Geometry);

impl MultiPolygon {
    /// The total area of the polygons.
    pub fn area(&self) -> Real {
        self.0.iter().map(|p| p.area()).sum()
    }

    /// Applies the isometry `m` to every polygon.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        self.0.iter().map(|p| p.transformed(m)).collect()
    }
}

impl MultiLineString {
    /// The total length of the line strings.
    pub fn length(&self) -> Real {
        self.0.iter().map(|l| l.length()).sum()
    }

    /// Applies the isometry `m` to every line string.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        self.0.iter().map(|l| l.transformed(m)).collect()
    }
}
