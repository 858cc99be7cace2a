//! Splitting of polygons and lines along a cutting line, and trimming of lines.

pub use self::check::check_parts;
pub use self::error::{GeometryRole, SplitError};
pub use self::intersections::{
    decompose_splitter, find_intersections, Contact, IntersectionKind, IntersectionPoint,
};
pub use self::precondition::splitter_line;
pub(crate) use self::split::map_components;
pub use self::split::{
    split, split_parts, split_with_tolerances, PrecisionModel, SplitByLine, SplitPart,
    SplitTolerances,
};
pub use self::trim::{trim, trim_with_tolerances};

mod arrangement;
mod check;
mod error;
mod intersections;
mod precondition;
mod split;
mod split_line;
mod split_polygon;
mod trim;
