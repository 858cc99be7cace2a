//! Various unsorted geometrical and logical operators.

pub use self::orientation::{
    ccw_angle, double_signed_area, orientation2d, pseudo_angle, signed_area, Orientation,
};
pub use self::point_in_poly2d::{locate_point_in_ring, point_in_poly2d, RingPointLocation};
pub use self::segments_intersection::{segments_intersection2d, SegmentsIntersection};
pub use self::sorted_pair::SortedPair;

pub mod hashmap;
mod orientation;
mod point_in_poly2d;
mod segments_intersection;
mod sorted_pair;
