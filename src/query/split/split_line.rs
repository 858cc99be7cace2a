use crate::math::{Point, Real};
use crate::query::split::intersections::{curve_intersections, Curve};
use crate::query::split::{precondition, SplitError, SplitTolerances};
use crate::query::SplitByLine;
use crate::shape::{LineString, MultiLineString};
use alloc::vec::Vec;
use ordered_float::OrderedFloat;

/// Cuts the open path `curve` at the given parameters.
///
/// Cuts closer than `epsilon` (in arc length) to an endpoint of the path or to the previous cut
/// are ignored. Consecutive pieces share the exact cut point. Returns the vertices of each
/// piece, in path order.
pub(crate) fn cut_at_params(
    curve: &Curve,
    cuts: &mut Vec<(Real, Point<Real>)>,
    epsilon: Real,
) -> Vec<Vec<Point<Real>>> {
    let n = curve.num_segments();
    let arcs = curve.arc_lengths();
    let length = arcs[arcs.len() - 1];

    cuts.sort_by_key(|c| OrderedFloat(c.0));
    let mut last_arc = 0.0;
    cuts.retain(|(param, _)| {
        let arc = curve.arc_length_at(&arcs, *param);
        let keep = arc - last_arc > epsilon && length - arc > epsilon;
        if keep {
            last_arc = arc;
        }
        keep
    });

    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut current = alloc::vec![curve.points[0]];
    let mut next_vertex = 1;

    for (param, pt) in cuts.iter() {
        while next_vertex <= n && (next_vertex as Real) < *param {
            current.push(curve.points[next_vertex]);
            next_vertex += 1;
        }

        if next_vertex as Real == *param {
            // The cut point replaces this vertex.
            next_vertex += 1;
        }

        current.push(*pt);
        pieces.push(core::mem::replace(&mut current, alloc::vec![*pt]));
    }

    current.extend_from_slice(&curve.points[next_vertex.min(n + 1)..]);
    pieces.push(current);
    pieces
}

impl SplitByLine for LineString {
    type Part = LineString;

    /// Splits this line at each crossing of the splitter.
    ///
    /// A line crossed `N` times yields `N + 1` pieces, ordered from the start of the line to its
    /// end. Touching intersections never cut the line, and neither do crossings at its
    /// endpoints. A closed line is cut as a path starting and ending at its first vertex.
    fn split_by_line(
        &self,
        splitter: &LineString,
        tolerances: &SplitTolerances,
    ) -> Result<Vec<LineString>, SplitError> {
        if self.is_empty() {
            return Ok(alloc::vec![self.clone()]);
        }

        precondition::validate_splitter(splitter, tolerances.epsilon)?;
        precondition::validate_line(self)?;
        let curve = Curve::line(self);
        let intersections = curve_intersections(&curve, 0, &Curve::line(splitter), tolerances);

        let mut cuts: Vec<_> = intersections
            .iter()
            .filter(|inter| inter.is_crossing())
            .filter_map(|inter| {
                inter
                    .contacts
                    .iter()
                    .min_by_key(|c| OrderedFloat(c.target_param))
                    .map(|c| (c.target_param, c.point))
            })
            .collect();

        if cuts.is_empty() {
            return Ok(alloc::vec![self.clone()]);
        }

        let pieces = cut_at_params(&curve.as_open(), &mut cuts, tolerances.epsilon);
        log::debug!("line cut at {} points into {} pieces", cuts.len(), pieces.len());
        Ok(pieces.into_iter().map(LineString::new).collect())
    }
}

impl SplitByLine for MultiLineString {
    type Part = LineString;

    /// Splits each line independently, concatenating the pieces in component order.
    fn split_by_line(
        &self,
        splitter: &LineString,
        tolerances: &SplitTolerances,
    ) -> Result<Vec<LineString>, SplitError> {
        let parts: Vec<Vec<LineString>> = super::map_components(&self.0, |line| {
            line.split_by_line(splitter, tolerances)
        })?;
        Ok(parts.into_iter().flatten().collect())
    }
}
