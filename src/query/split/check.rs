use crate::math::Real;
use crate::query::split::{SplitError, SplitTolerances};
use crate::shape::Geometry;

/// The measure preserved by a split: the area of polygonal targets, the length of linear ones.
fn measure(target: &Geometry, geometry: &Geometry) -> Real {
    match target {
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => geometry.area(),
        _ => geometry.length(),
    }
}

/// Checks that `parts` cover `target` exactly once.
///
/// The total area (or length, for linear targets) of the parts must match the area (or length)
/// of the target, up to `target_measure * tolerances.area_ratio`. Otherwise
/// [`SplitError::ToleranceViolation`] is returned.
pub fn check_parts(
    target: &Geometry,
    parts: &[Geometry],
    tolerances: &SplitTolerances,
) -> Result<(), SplitError> {
    let expected = measure(target, target);
    let total: Real = parts.iter().map(|part| measure(target, part)).sum();
    let difference = (total - expected).abs();
    let tolerance = expected * tolerances.area_ratio;

    if difference > tolerance {
        Err(SplitError::ToleranceViolation {
            difference,
            tolerance,
        })
    } else {
        Ok(())
    }
}
