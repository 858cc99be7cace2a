use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::split::precondition::{self, Precondition, SplitTarget};
use crate::query::split::split_polygon::split_polygon;
use crate::query::split::{check_parts, SplitError};
use crate::shape::{Geometry, GeometryCollection, LineString, Polygon};
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How computed coordinates are rounded before being inserted in the results.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PrecisionModel {
    /// Computed coordinates are kept as they are.
    #[default]
    Floating,
    /// Computed coordinates are rounded to the grid of step `1 / scale`.
    ///
    /// A scale of `1000.0` keeps three decimals.
    Fixed {
        /// The number of grid steps per unit.
        scale: Real,
    },
}

impl PrecisionModel {
    /// Rounds `pt` according to this precision model.
    pub fn make_precise(&self, pt: Point<Real>) -> Point<Real> {
        match *self {
            PrecisionModel::Floating => pt,
            PrecisionModel::Fixed { scale } => {
                Point::new((pt.x * scale).round() / scale, (pt.y * scale).round() / scale)
            }
        }
    }
}

/// Tolerances for the split and trim operations.
///
/// # Examples
///
/// ```
/// use cleave2d::query::{PrecisionModel, SplitTolerances};
///
/// // Use default tolerances (recommended for most cases)
/// let default_tol = SplitTolerances::default();
/// assert_eq!(default_tol.precision, PrecisionModel::Floating);
///
/// // Or snap every computed point to a millimetric grid.
/// let fixed = SplitTolerances::fixed(1000.0);
/// assert_eq!(fixed.epsilon, 1.0e-3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SplitTolerances {
    /// Points closer than this distance are considered coincident.
    pub epsilon: Real,
    /// The maximum relative difference between the area (or length) of the target and the
    /// total area (or length) of the parts before [`crate::query::check_parts`] reports an error.
    pub area_ratio: Real,
    /// The rounding applied to computed intersection points.
    pub precision: PrecisionModel,
}

impl Default for SplitTolerances {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            area_ratio: 1.0e-4,
            precision: PrecisionModel::Floating,
        }
    }
}

impl SplitTolerances {
    /// Tolerances for coordinates living on the decimal grid of step `1 / scale`.
    ///
    /// The snapping distance is one grid step so that a rounded intersection point is always
    /// considered to lie on the curves it was computed from.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not a finite positive number.
    pub fn fixed(scale: Real) -> Self {
        assert!(
            scale.is_finite() && scale > 0.0,
            "the grid scale must be finite and positive, got {}",
            scale
        );
        Self {
            epsilon: 1.0 / scale,
            precision: PrecisionModel::Fixed { scale },
            ..Self::default()
        }
    }
}

/// One part resulting from a split, with its provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitPart {
    /// The geometry of this part: a polygon or a line string.
    pub geometry: Geometry,
    /// The index of the component of a multi-part target this part comes from. Always `0` for
    /// single-part targets.
    pub component: usize,
    /// Indices of the holes of the source polygon kept as holes of this part.
    pub retained_holes: Vec<usize>,
    /// Indices of the holes of the source polygon that became part of this part's exterior
    /// ring because the splitter threads through them.
    pub merged_holes: Vec<usize>,
}

impl SplitPart {
    pub(crate) fn new(geometry: Geometry, component: usize) -> Self {
        Self {
            geometry,
            component,
            retained_holes: Vec::new(),
            merged_holes: Vec::new(),
        }
    }
}

/// Trait implemented by geometries that can be split by a cutting line.
pub trait SplitByLine {
    /// The type of the resulting parts.
    type Part;

    /// Splits `self` along `splitter`.
    ///
    /// Returns the parts in their canonical order. If the splitter does not cross `self`, the
    /// result contains a copy of `self` only (or of each component, for multi-part geometries).
    fn split_by_line(
        &self,
        splitter: &LineString,
        tolerances: &SplitTolerances,
    ) -> Result<Vec<Self::Part>, SplitError>;
}

/// Applies `f` to every component of a multi-part geometry, keeping the component order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn map_components<T, R, F>(components: &[T], f: F) -> Result<Vec<R>, SplitError>
where
    F: Fn(&T) -> Result<R, SplitError>,
{
    components.iter().map(f).collect()
}

/// Applies `f` to every component of a multi-part geometry, keeping the component order.
#[cfg(feature = "parallel")]
pub(crate) fn map_components<T, R, F>(components: &[T], f: F) -> Result<Vec<R>, SplitError>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R, SplitError> + Sync + Send,
{
    components.par_iter().map(f).collect()
}

/// Splits `target` along `splitter` with the default tolerances.
///
/// See [`split_with_tolerances`].
pub fn split(target: &Geometry, splitter: &LineString) -> Result<GeometryCollection, SplitError> {
    split_with_tolerances(target, splitter, &SplitTolerances::default())
}

/// Splits `target` along `splitter`.
///
/// The target must be a polygon, a multi-polygon, a line string or a multi-line string. The
/// result is never empty: if the splitter does not cross the target, or the target is empty,
/// it contains a copy of the target only.
///
/// Polygon parts are ordered along the boundary of the source exterior ring and line pieces
/// from the start of the line to its end. Parts of multi-part targets are then ordered by
/// component.
pub fn split_with_tolerances(
    target: &Geometry,
    splitter: &LineString,
    tolerances: &SplitTolerances,
) -> Result<GeometryCollection, SplitError> {
    let parts: GeometryCollection = split_parts(target, splitter, tolerances)?
        .into_iter()
        .map(|part| part.geometry)
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        if let Err(err) = check_parts(target, &parts, tolerances) {
            log::warn!("inconsistent split result: {}", err);
        }
    }

    Ok(parts)
}

/// Splits `target` along `splitter`, returning each part with its provenance.
///
/// Parts are the same, and in the same order, as the ones returned by
/// [`split_with_tolerances`]. Components of a multi-part target that are not crossed are
/// returned as parts of their own.
pub fn split_parts(
    target: &Geometry,
    splitter: &LineString,
    tolerances: &SplitTolerances,
) -> Result<Vec<SplitPart>, SplitError> {
    let target_kind = match precondition::validate_split(target, splitter, tolerances.epsilon)? {
        Precondition::Identity => return Ok(alloc::vec![SplitPart::new(target.clone(), 0)]),
        Precondition::Proceed(target_kind) => target_kind,
    };

    type Parts = Result<Option<Vec<SplitPart>>, SplitError>;

    let polygon_parts = |poly: &Polygon, component: usize| -> Parts {
        if poly.is_empty() {
            return Ok(None);
        }

        let parts = split_polygon(poly, splitter, tolerances)?;
        Ok(parts.map(|parts| {
            parts
                .into_iter()
                .map(|part| SplitPart {
                    geometry: Geometry::Polygon(part.polygon),
                    component,
                    retained_holes: part.retained_holes,
                    merged_holes: part.merged_holes,
                })
                .collect()
        }))
    };
    let line_parts = |line: &LineString, component: usize| -> Parts {
        if line.is_empty() {
            return Ok(None);
        }

        let pieces = line.split_by_line(splitter, tolerances)?;
        Ok((pieces.len() > 1).then(|| {
            pieces
                .into_iter()
                .map(|piece| SplitPart::new(Geometry::LineString(piece), component))
                .collect()
        }))
    };
    let whole_target = || alloc::vec![SplitPart::new(target.clone(), 0)];

    Ok(match target_kind {
        SplitTarget::Polygon(poly) => {
            let parts =
                split_components(core::slice::from_ref(poly), polygon_parts, unsplit_polygon)?;
            parts.unwrap_or_else(|| alloc::vec![unsplit_polygon(poly, 0)])
        }
        SplitTarget::MultiPolygon(mp) => {
            split_components(&mp.0, polygon_parts, unsplit_polygon)?.unwrap_or_else(whole_target)
        }
        SplitTarget::LineString(line) => {
            split_components(core::slice::from_ref(line), line_parts, unsplit_line)?
                .unwrap_or_else(whole_target)
        }
        SplitTarget::MultiLineString(ml) => {
            split_components(&ml.0, line_parts, unsplit_line)?.unwrap_or_else(whole_target)
        }
    })
}

/// Splits each component with `split_one`, which returns `None` for components that are not
/// divided.
///
/// Returns `None` if no component was divided.
fn split_components<T, F>(
    components: &[T],
    split_one: F,
    unsplit: fn(&T, usize) -> SplitPart,
) -> Result<Option<Vec<SplitPart>>, SplitError>
where
    T: Sync,
    F: Fn(&T, usize) -> Result<Option<Vec<SplitPart>>, SplitError> + Sync + Send,
{
    let indexed: Vec<(usize, &T)> = components.iter().enumerate().collect();
    let results = map_components(&indexed, |&(i, component)| split_one(component, i))?;

    if results.iter().all(Option::is_none) {
        return Ok(None);
    }

    let parts = results
        .into_iter()
        .zip(indexed)
        .flat_map(|(parts, (i, component))| {
            parts.unwrap_or_else(|| alloc::vec![unsplit(component, i)])
        })
        .collect();
    Ok(Some(parts))
}

fn unsplit_polygon(poly: &Polygon, component: usize) -> SplitPart {
    SplitPart {
        retained_holes: (0..poly.interiors().len()).collect(),
        ..SplitPart::new(Geometry::Polygon(poly.clone()), component)
    }
}

fn unsplit_line(line: &LineString, component: usize) -> SplitPart {
    SplitPart::new(Geometry::LineString(line.clone()), component)
}
