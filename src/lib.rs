/*!
cleave2d
========

**cleave2d** splits planar polygons, multi-polygons, lines and multi-lines
along a cutting line, and trims lines into their left and right halves
relative to that cutting line.

```
# #[cfg(feature = "wkt")] {
use cleave2d::io::parse_wkt;
use cleave2d::query::split;

let target = parse_wkt("POLYGON((20 20,40 20,40 40,20 40,20 20))").unwrap();
let splitter = parse_wkt("LINESTRING(30 0,30 60)").unwrap();
let parts = split(&target, splitter.as_line_string().unwrap()).unwrap();
assert_eq!(parts.len(), 2);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
#[cfg(feature = "wkt")]
pub mod io;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry2, Point2, Rotation2, Translation2, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default snapping distance used by the split engine.
    pub const DEFAULT_EPSILON: Real = 1.0e-9;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The rigid transformation type.
    pub use Isometry2 as Isometry;

    /// The translation type.
    pub use Translation2 as Translation;
}
