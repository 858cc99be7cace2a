//! Reading and writing geometries as Well-Known Text.

pub use self::wkt::{parse_wkt, ToWkt, WktError};

mod wkt;
