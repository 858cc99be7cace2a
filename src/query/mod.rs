//! Geometric queries on planar geometries.
//!
//! The main entry points are:
//!
//! * [`query::split()`] to divide a polygonal or linear geometry along a cutting line.
//! * [`query::trim()`] to cut a line into its halves on each side of a cutting line.
//! * [`query::find_intersections()`] to inspect where a cutting line meets a geometry.
//!
//! Every operation has a `_with_tolerances` variant taking explicit [`SplitTolerances`].

pub use self::split::*;

pub mod split;
