use crate::math::{Isometry, Point, Real};
use crate::shape::{GeometryCollection, LineString, MultiLineString, MultiPolygon, Polygon};
use alloc::vec::Vec;
use core::fmt;

/// Enum listing all the geometry types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GeometryType {
    /// A single point.
    Point,
    /// A set of points.
    MultiPoint,
    /// A line string.
    LineString,
    /// A set of line strings.
    MultiLineString,
    /// A polygon, possibly with holes.
    Polygon,
    /// A set of polygons.
    MultiPolygon,
    /// A heterogeneous set of geometries.
    GeometryCollection,
}

impl GeometryType {
    /// The upper-case name of this geometry type, as used by WKT.
    pub fn name(self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A planar geometry of any of the supported types.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// A single point.
    Point(Point<Real>),
    /// A set of points.
    MultiPoint(Vec<Point<Real>>),
    /// A line string.
    LineString(LineString),
    /// A set of line strings.
    MultiLineString(MultiLineString),
    /// A polygon, possibly with holes.
    Polygon(Polygon),
    /// A set of polygons.
    MultiPolygon(MultiPolygon),
    /// A heterogeneous set of geometries.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The type of this geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Is this geometry empty?
    ///
    /// Multi-part geometries are empty if all their components are empty. A point is never
    /// empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::MultiPoint(pts) => pts.is_empty(),
            Geometry::LineString(l) => l.is_empty(),
            Geometry::MultiLineString(ml) => ml.is_empty(),
            Geometry::Polygon(p) => p.is_empty(),
            Geometry::MultiPolygon(mp) => mp.is_empty(),
            Geometry::GeometryCollection(gc) => gc.iter().all(|g| g.is_empty()),
        }
    }

    /// An empty geometry of the same type as `self`.
    ///
    /// Points have no empty representation and yield an empty multi-point.
    pub fn empty_like(&self) -> Geometry {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Geometry::MultiPoint(Vec::new()),
            Geometry::LineString(_) => Geometry::LineString(LineString::empty()),
            Geometry::MultiLineString(_) => Geometry::MultiLineString(MultiLineString::default()),
            Geometry::Polygon(_) => Geometry::Polygon(Polygon::empty()),
            Geometry::MultiPolygon(_) => Geometry::MultiPolygon(MultiPolygon::default()),
            Geometry::GeometryCollection(_) => {
                Geometry::GeometryCollection(GeometryCollection::default())
            }
        }
    }

    /// The area covered by this geometry. Zero for points and lines.
    pub fn area(&self) -> Real {
        match self {
            Geometry::Polygon(p) => p.area(),
            Geometry::MultiPolygon(mp) => mp.area(),
            Geometry::GeometryCollection(gc) => gc.iter().map(|g| g.area()).sum(),
            _ => 0.0,
        }
    }

    /// The total length of the linear components of this geometry. Zero for points and
    /// polygons.
    pub fn length(&self) -> Real {
        match self {
            Geometry::LineString(l) => l.length(),
            Geometry::MultiLineString(ml) => ml.length(),
            Geometry::GeometryCollection(gc) => gc.iter().map(|g| g.length()).sum(),
            _ => 0.0,
        }
    }

    /// Applies the isometry `m` to every coordinate of this geometry.
    pub fn transformed(&self, m: &Isometry<Real>) -> Geometry {
        match self {
            Geometry::Point(pt) => Geometry::Point(m * pt),
            Geometry::MultiPoint(pts) => Geometry::MultiPoint(pts.iter().map(|pt| m * pt).collect()),
            Geometry::LineString(l) => Geometry::LineString(l.transformed(m)),
            Geometry::MultiLineString(ml) => Geometry::MultiLineString(ml.transformed(m)),
            Geometry::Polygon(p) => Geometry::Polygon(p.transformed(m)),
            Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(mp.transformed(m)),
            Geometry::GeometryCollection(gc) => {
                Geometry::GeometryCollection(gc.iter().map(|g| g.transformed(m)).collect())
            }
        }
    }

    /// Returns a reference to the underlying line string, if `self` is one.
    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(l) => Some(l),
            _ => None,
        }
    }

    /// Returns a reference to the underlying polygon, if `self` is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<LineString> for Geometry {
    fn from(l: LineString) -> Self {
        Geometry::LineString(l)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(ml: MultiLineString) -> Self {
        Geometry::MultiLineString(ml)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(mp: MultiPolygon) -> Self {
        Geometry::MultiPolygon(mp)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(gc: GeometryCollection) -> Self {
        Geometry::GeometryCollection(gc)
    }
}
