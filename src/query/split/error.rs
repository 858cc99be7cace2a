use crate::math::Real;
use crate::shape::GeometryType;
use core::fmt;

/// The role played by a geometry given to a split or trim operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryRole {
    /// The geometry being split or trimmed.
    Target,
    /// The cutting line.
    Splitter,
}

impl fmt::Display for GeometryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryRole::Target => f.write_str("target"),
            GeometryRole::Splitter => f.write_str("splitter"),
        }
    }
}

/// Errors reported by the split and trim operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SplitError {
    /// The geometry type is not supported for the given role.
    #[error("unsupported geometry type for the {role}: {found}")]
    InvalidGeometryType {
        /// Whether the target or the splitter is unsupported.
        role: GeometryRole,
        /// The type that was given.
        found: GeometryType,
    },
    /// Trim requires the splitter to meet the target at exactly one point.
    #[error("ambiguous or absent cut point: the splitter meets the target at {found} points")]
    AmbiguousCut {
        /// The number of intersection points found. Collinear overlaps count as two points.
        found: usize,
    },
    /// The splitter does not have two distinct points.
    #[error("the splitter must contain at least two distinct points")]
    DegenerateSplitter,
    /// A coordinate is NaN or infinite.
    #[error("the geometry contains a non-finite coordinate")]
    NonFiniteCoordinate,
    /// The target geometry is not well-formed.
    #[error("malformed target geometry: {reason}")]
    MalformedTarget {
        /// What is wrong with the target.
        reason: &'static str,
    },
    /// An infinite loop was detected while tracing the faces of the arrangement.
    ///
    /// This typically indicates that the target polygon is ill-formed, e.g., self-intersecting.
    #[error("Infinite loop detected; the target polygon is ill-formed.")]
    InfiniteLoop,
    /// The total measure of the parts differs too much from the measure of the target.
    #[error("the parts differ from the target by {difference}, exceeding the tolerance {tolerance}")]
    ToleranceViolation {
        /// The absolute difference of area (or length).
        difference: Real,
        /// The maximum difference allowed.
        tolerance: Real,
    },
}
