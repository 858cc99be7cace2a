use crate::math::{Point, Real};
use crate::query::split::arrangement::{Arrangement, EdgeKind, Face, NodeFlags, NodeId};
use crate::query::split::intersections::{
    curve_intersections, splitter_self_intersections, Curve, IntersectionPoint,
};
use crate::query::split::{precondition, SplitByLine, SplitError, SplitTolerances};
use crate::shape::{LineString, MultiPolygon, Polygon, Ring};
use crate::utils::{self, Orientation, RingPointLocation};
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::{debug, warn};
use ordered_float::OrderedFloat;

/// A polygon resulting from a split, with the holes of the source polygon it absorbed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PolygonPart {
    pub polygon: Polygon,
    pub retained_holes: Vec<usize>,
    pub merged_holes: Vec<usize>,
}

struct TracedRing<'a> {
    face: &'a Face,
    ring: Ring,
    area: Real,
}

/// Splits `poly` along `splitter`.
///
/// Returns `None` if the splitter does not divide the polygon, in which case the polygon must be
/// returned unchanged.
pub(crate) fn split_polygon(
    poly: &Polygon,
    splitter: &LineString,
    tolerances: &SplitTolerances,
) -> Result<Option<Vec<PolygonPart>>, SplitError> {
    let eps = tolerances.epsilon;

    // Put the interior on the left of every ring.
    let normalized = Polygon::new(
        poly.exterior().oriented(true),
        poly.interiors().iter().map(|h| h.oriented(false)).collect(),
    );
    let rings: Vec<Curve> = normalized.rings().map(Curve::ring).collect();
    let splitter_curve = Curve::line(splitter);
    let intersections: Vec<Vec<IntersectionPoint>> = rings
        .iter()
        .enumerate()
        .map(|(i, ring)| curve_intersections(ring, i, &splitter_curve, tolerances))
        .collect();

    // An endpoint resting on the boundary is a touching contact, but a chord between two such
    // endpoints still divides the polygon.
    let end_param = splitter_curve.num_segments() as Real;
    let is_splitter_end = |i: &IntersectionPoint| {
        !splitter_curve.closed
            && i.contacts
                .iter()
                .any(|c| c.splitter_param == 0.0 || c.splitter_param == end_param)
    };

    if !intersections
        .iter()
        .flatten()
        .any(|i| i.is_crossing() || is_splitter_end(i))
    {
        debug!("the splitter does not cross the polygon boundary");
        return Ok(None);
    }

    let mut arrangement = Arrangement::new(eps);
    let mut splitter_breaks = Vec::new();

    for (ring_id, (ring, inters)) in rings.iter().zip(&intersections).enumerate() {
        let contacts = || inters.iter().flat_map(|i| &i.contacts);
        splitter_breaks.extend(contacts().map(|c| (c.splitter_param, c.point)));
        arrangement.insert_curve(
            ring.points,
            contacts().map(|c| (c.target_param, c.point)).collect(),
            EdgeKind::Boundary { ring: ring_id },
        );
    }

    for c in splitter_self_intersections(&splitter_curve, tolerances) {
        splitter_breaks.push((c.target_param, c.point));
        splitter_breaks.push((c.splitter_param, c.point));
    }

    arrangement.insert_curve(splitter.points(), splitter_breaks, EdgeKind::Splitter);
    arrangement.retain_splitter_edges(|segment| {
        normalized.locate_point(&segment.midpoint(), eps) == RingPointLocation::Inside
    });
    let _ = arrangement.prune_dangling_edges();

    let faces = loop {
        let faces = arrangement.faces()?;
        let num_bridges = arrangement.remove_bridges(&faces);

        if num_bridges == 0 {
            break faces;
        }

        debug!("removed {} splitter bridge edges", num_bridges);
        let _ = arrangement.prune_dangling_edges();
    };

    // A face touching itself at a node, e.g., around a hole grazed at one vertex, is traced
    // as one cycle per loop.
    let cycles: Vec<Face> = faces
        .iter()
        .flat_map(|f| arrangement.simple_cycles(f))
        .collect();
    let mut shells = Vec::new();
    let mut holes = Vec::new();

    for face in cycles.iter().filter(|f| !arrangement.is_exterior_face(f)) {
        let area = arrangement.face_area(face);

        if area.abs() <= eps * arrangement.face_perimeter(face) {
            debug!("dropped a degenerate face of area {}", area);
            continue;
        }

        let traced = TracedRing {
            face,
            ring: Ring::new(face_points(&arrangement, face, eps)),
            area,
        };

        if area > 0.0 {
            shells.push(traced);
        } else {
            holes.push(traced);
        }
    }

    if shells.len() <= 1 {
        debug!("the splitter does not divide the polygon");
        return Ok(None);
    }

    shells.sort_by_key(|s| s.face.min_edge());
    let mut shell_holes: Vec<Vec<usize>> = alloc::vec![Vec::new(); shells.len()];
    let mut pending: VecDeque<usize> = (0..holes.len()).collect();

    while let Some(h) = pending.pop_front() {
        let hole = &holes[h];
        let container = shells
            .iter()
            .enumerate()
            .filter(|(_, shell)| ring_contains(&shell.ring, &hole.ring, eps))
            .min_by_key(|(_, shell)| OrderedFloat(shell.area))
            .map(|(i, _)| i);

        match container {
            Some(i) => shell_holes[i].push(h),
            None => warn!(
                "no part contains the hole of area {}; it is dropped",
                -hole.area
            ),
        }
    }

    // Parts keep the winding of the source exterior ring.
    let ccw = poly.exterior().is_ccw();
    let orient = |ring: &Ring, shell: bool| ring.oriented(ccw == shell);

    let parts = shells
        .iter()
        .zip(shell_holes)
        .map(|(shell, hole_ids)| {
            let hole_index = |ring: usize| ring.checked_sub(1);
            let merged_holes = arrangement
                .face_rings(shell.face)
                .into_iter()
                .filter_map(hole_index)
                .collect();
            let mut retained_holes: Vec<usize> = hole_ids
                .iter()
                .flat_map(|h| arrangement.face_rings(holes[*h].face))
                .filter_map(hole_index)
                .collect();
            retained_holes.sort_unstable();
            retained_holes.dedup();

            PolygonPart {
                polygon: Polygon::new(
                    orient(&shell.ring, true),
                    hole_ids
                        .iter()
                        .map(|h| orient(&holes[*h].ring, false))
                        .collect(),
                ),
                retained_holes,
                merged_holes,
            }
        })
        .collect::<Vec<_>>();

    debug!("polygon split into {} parts", parts.len());
    Ok(Some(parts))
}

/// The vertices of a traced face, without the intersection nodes lying on a straight portion.
fn face_points(arrangement: &Arrangement, face: &Face, epsilon: Real) -> Vec<Point<Real>> {
    let nodes: Vec<NodeId> = arrangement.face_nodes(face);
    let n = nodes.len();

    (0..n)
        .filter(|i| {
            let node = arrangement.node(nodes[*i]);
            if node.flags.contains(NodeFlags::ORIGINAL) {
                return true;
            }

            let prev = arrangement.node(nodes[(i + n - 1) % n]).point;
            let next = arrangement.node(nodes[(i + 1) % n]).point;
            utils::orientation2d(&prev, &next, &node.point, epsilon) != Orientation::Degenerate
        })
        .map(|i| arrangement.node(nodes[i]).point)
        .collect()
}

/// Is the region bounded by `inner` inside the region bounded by `outer`?
///
/// Decided by the first vertex of `inner` that does not lie on `outer`.
fn ring_contains(outer: &Ring, inner: &Ring, epsilon: Real) -> bool {
    inner
        .points()
        .iter()
        .map(|pt| outer.locate_point(pt, epsilon))
        .find(|loc| *loc != RingPointLocation::OnBoundary)
        == Some(RingPointLocation::Inside)
}

impl SplitByLine for Polygon {
    type Part = Polygon;

    fn split_by_line(
        &self,
        splitter: &LineString,
        tolerances: &SplitTolerances,
    ) -> Result<Vec<Polygon>, SplitError> {
        if self.is_empty() {
            return Ok(alloc::vec![self.clone()]);
        }

        precondition::validate_splitter(splitter, tolerances.epsilon)?;
        precondition::validate_polygon(self)?;
        let parts = split_polygon(self, splitter, tolerances)?;
        Ok(match parts {
            Some(parts) => parts.into_iter().map(|p| p.polygon).collect(),
            None => alloc::vec![self.clone()],
        })
    }
}

impl SplitByLine for MultiPolygon {
    type Part = Polygon;

    /// Splits each polygon independently, concatenating the parts in component order.
    fn split_by_line(
        &self,
        splitter: &LineString,
        tolerances: &SplitTolerances,
    ) -> Result<Vec<Polygon>, SplitError> {
        let parts: Vec<Vec<Polygon>> = super::map_components(&self.0, |poly| {
            poly.split_by_line(splitter, tolerances)
        })?;
        Ok(parts.into_iter().flatten().collect())
    }
}
