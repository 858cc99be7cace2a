use crate::math::{Point, Real, Vector};
use crate::query::split::intersections::{curve_intersections, Curve, IntersectionPoint};
use crate::query::split::precondition::{self, Precondition, SplitTarget};
use crate::query::split::split_line::cut_at_params;
use crate::query::split::{GeometryRole, SplitError, SplitTolerances};
use crate::shape::{Geometry, LineString, MultiLineString};
use alloc::vec::Vec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The side of `cut` the points lie on, relative to the splitter direction `dir`.
///
/// Points within `epsilon` of the cut are ignored. Returns `None` if there is no other point.
fn side_of(
    points: &[Point<Real>],
    cut: &Point<Real>,
    dir: &Vector<Real>,
    epsilon: Real,
) -> Option<Side> {
    let mut any = false;
    let mut total = 0.0;

    for pt in points {
        let offset = pt - cut;
        if offset.norm() > epsilon {
            any = true;
            total += dir.perp(&offset);
        }
    }

    any.then_some(if total > 0.0 { Side::Right } else { Side::Left })
}

/// Trims `target` along `splitter` with the default tolerances.
///
/// See [`trim_with_tolerances`].
pub fn trim(target: &Geometry, splitter: &LineString) -> Result<(Geometry, Geometry), SplitError> {
    trim_with_tolerances(target, splitter, &SplitTolerances::default())
}

/// Cuts a line into the halves lying on each side of `splitter`.
///
/// The splitter must meet `target` exactly once. A splitter running along the target over some
/// distance meets it at both ends of the shared portion, and any other number of meeting points
/// yields [`SplitError::AmbiguousCut`].
///
/// Returns `(left, right)`. A point `p` of the target lies on the right half if the cross product
/// `d × (p - c)` is positive, where `c` is the cut point and `d` the direction of the splitter at
/// `c`. Reversing the splitter thus swaps both halves. The halves have the same type as
/// `target`, share the cut point, and one of them may be empty. Other components of a
/// multi-line go wholly to the side of their points.
pub fn trim_with_tolerances(
    target: &Geometry,
    splitter: &LineString,
    tolerances: &SplitTolerances,
) -> Result<(Geometry, Geometry), SplitError> {
    let eps = tolerances.epsilon;
    let lines: Vec<&LineString> = match precondition::validate_trim(target, splitter, eps)? {
        Precondition::Identity => return Ok((target.clone(), target.empty_like())),
        Precondition::Proceed(SplitTarget::LineString(line)) => alloc::vec![line],
        Precondition::Proceed(SplitTarget::MultiLineString(ml)) => ml.iter().collect(),
        Precondition::Proceed(_) => {
            return Err(SplitError::InvalidGeometryType {
                role: GeometryRole::Target,
                found: target.geometry_type(),
            })
        }
    };

    let splitter_curve = Curve::line(splitter);
    let intersections: Vec<Vec<IntersectionPoint>> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| curve_intersections(&Curve::line(line), i, &splitter_curve, tolerances))
        .collect();

    let found: usize = intersections
        .iter()
        .flatten()
        .map(IntersectionPoint::multiplicity)
        .sum();
    let cut = intersections.iter().flatten().next();
    let (Some(cut), 1) = (cut, found) else {
        return Err(SplitError::AmbiguousCut { found });
    };

    let contact = *cut.target_start();
    let dir = splitter_curve
        .tangent(contact.splitter_param, eps)
        .ok_or(SplitError::DegenerateSplitter)?;
    log::debug!(
        "trimming at {:?} with splitter direction {:?}",
        contact.point,
        dir
    );

    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut push = |side: Side, line: LineString| match side {
        Side::Left => left.push(line),
        Side::Right => right.push(line),
    };

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        let whole_side =
            || side_of(line.points(), &contact.point, &dir, eps).unwrap_or(Side::Left);

        // A touching contact leaves its line whole.
        if i != cut.curve || !cut.is_crossing() {
            push(whole_side(), (*line).clone());
            continue;
        }

        let curve = Curve::line(line).as_open();
        let mut cuts = alloc::vec![(contact.target_param, contact.point)];
        let pieces: Vec<(Side, Vec<Point<Real>>)> = cut_at_params(&curve, &mut cuts, eps)
            .into_iter()
            .filter_map(|piece| side_of(&piece, &contact.point, &dir, eps).map(|s| (s, piece)))
            .collect();
        let divided = matches!(pieces.as_slice(), [(before, _), (after, _)] if before != after);

        if divided {
            for (side, piece) in pieces {
                push(side, LineString::new(piece));
            }
        } else {
            push(whole_side(), (*line).clone());
        }
    }

    Ok(match target {
        Geometry::MultiLineString(_) => (
            Geometry::MultiLineString(MultiLineString::new(left)),
            Geometry::MultiLineString(MultiLineString::new(right)),
        ),
        _ => (
            Geometry::LineString(left.pop().unwrap_or_default()),
            Geometry::LineString(right.pop().unwrap_or_default()),
        ),
    })
}
