//! Geometries supported by cleave2d.

pub use self::geometry::{Geometry, GeometryType};
pub use self::line_string::LineString;
pub use self::multi::{GeometryCollection, MultiLineString, MultiPolygon};
pub use self::polygon::Polygon;
pub use self::ring::Ring;
pub use self::segment::{Segment, SegmentPointLocation};

mod geometry;
mod line_string;
mod multi;
mod polygon;
mod ring;
mod segment;
