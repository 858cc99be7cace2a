//! Validation of the inputs of split and trim, run once before any geometric work.

use crate::math::Real;
use crate::query::split::{GeometryRole, SplitError};
use crate::shape::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon, Ring};

/// A target geometry that passed validation.
#[derive(Copy, Clone, Debug)]
pub(crate) enum SplitTarget<'a> {
    Polygon(&'a Polygon),
    MultiPolygon(&'a MultiPolygon),
    LineString(&'a LineString),
    MultiLineString(&'a MultiLineString),
}

/// The outcome of a successful validation.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Precondition<'a> {
    /// The target is empty: it must be returned unchanged.
    Identity,
    /// The inputs are valid: proceed with the given target.
    Proceed(SplitTarget<'a>),
}

/// Extracts the cutting line from an arbitrary geometry.
///
/// Fails with [`SplitError::InvalidGeometryType`] if `splitter` is not a line string.
pub fn splitter_line(splitter: &Geometry) -> Result<&LineString, SplitError> {
    splitter
        .as_line_string()
        .ok_or(SplitError::InvalidGeometryType {
            role: GeometryRole::Splitter,
            found: splitter.geometry_type(),
        })
}

pub(crate) fn validate_split<'a>(
    target: &'a Geometry,
    splitter: &LineString,
    epsilon: Real,
) -> Result<Precondition<'a>, SplitError> {
    if target.is_empty() {
        return Ok(Precondition::Identity);
    }

    let target = match target {
        Geometry::Polygon(p) => SplitTarget::Polygon(p),
        Geometry::MultiPolygon(mp) => SplitTarget::MultiPolygon(mp),
        Geometry::LineString(l) => SplitTarget::LineString(l),
        Geometry::MultiLineString(ml) => SplitTarget::MultiLineString(ml),
        _ => {
            return Err(SplitError::InvalidGeometryType {
                role: GeometryRole::Target,
                found: target.geometry_type(),
            })
        }
    };

    validate_splitter(splitter, epsilon)?;
    validate_target(target)?;
    Ok(Precondition::Proceed(target))
}

pub(crate) fn validate_trim<'a>(
    target: &'a Geometry,
    splitter: &LineString,
    epsilon: Real,
) -> Result<Precondition<'a>, SplitError> {
    if target.is_empty() {
        return Ok(Precondition::Identity);
    }

    let target = match target {
        Geometry::LineString(l) => SplitTarget::LineString(l),
        Geometry::MultiLineString(ml) => SplitTarget::MultiLineString(ml),
        _ => {
            return Err(SplitError::InvalidGeometryType {
                role: GeometryRole::Target,
                found: target.geometry_type(),
            })
        }
    };

    validate_splitter(splitter, epsilon)?;
    validate_target(target)?;
    Ok(Precondition::Proceed(target))
}

pub(crate) fn validate_splitter(splitter: &LineString, epsilon: Real) -> Result<(), SplitError> {
    if !splitter.has_finite_coordinates() {
        return Err(SplitError::NonFiniteCoordinate);
    }

    let Some(first) = splitter.points().first() else {
        return Err(SplitError::DegenerateSplitter);
    };

    if splitter
        .points()
        .iter()
        .all(|pt| na::distance(first, pt) <= epsilon)
    {
        return Err(SplitError::DegenerateSplitter);
    }

    Ok(())
}

pub(crate) fn validate_target(target: SplitTarget) -> Result<(), SplitError> {
    match target {
        SplitTarget::Polygon(p) => validate_polygon(p),
        SplitTarget::MultiPolygon(mp) => mp
            .iter()
            .filter(|p| !p.is_empty())
            .try_for_each(validate_polygon),
        SplitTarget::LineString(l) => validate_line(l),
        SplitTarget::MultiLineString(ml) => ml
            .iter()
            .filter(|l| !l.is_empty())
            .try_for_each(validate_line),
    }
}

pub(crate) fn validate_polygon(poly: &Polygon) -> Result<(), SplitError> {
    validate_ring(poly.exterior())?;

    for hole in poly.interiors() {
        if hole.is_empty() {
            return Err(SplitError::MalformedTarget {
                reason: "a hole ring is empty",
            });
        }
        validate_ring(hole)?;
    }

    Ok(())
}

fn validate_ring(ring: &Ring) -> Result<(), SplitError> {
    if !ring.points().iter().all(|pt| pt.x.is_finite() && pt.y.is_finite()) {
        return Err(SplitError::NonFiniteCoordinate);
    }

    if ring.len() < 4 {
        return Err(SplitError::MalformedTarget {
            reason: "a ring must have at least four coordinates",
        });
    }

    Ok(())
}

pub(crate) fn validate_line(line: &LineString) -> Result<(), SplitError> {
    if !line.has_finite_coordinates() {
        return Err(SplitError::NonFiniteCoordinate);
    }

    if line.len() < 2 {
        return Err(SplitError::MalformedTarget {
            reason: "a line string must have at least two coordinates",
        });
    }

    Ok(())
}
