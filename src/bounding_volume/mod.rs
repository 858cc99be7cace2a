//! Bounding volumes used to discard segment pairs that cannot meet.

pub use self::aabb::Aabb;

mod aabb;
