//! Intersections between a target boundary and a splitter, classified as crossing or touching.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::split::SplitTolerances;
use crate::shape::{Geometry, LineString, Ring, Segment, SegmentPointLocation};
use crate::utils::{self, SegmentsIntersection};
use alloc::vec::Vec;
use core::f64::consts::TAU;
use ordered_float::OrderedFloat;

/// Rays closer than this angle (in radians) are considered aligned.
const ANGULAR_EPSILON: Real = 1.0e-9;

/// How the splitter meets the target boundary at an intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntersectionKind {
    /// The splitter passes from one side of the boundary to the other.
    Crossing,
    /// The splitter meets the boundary without passing to the other side.
    Touching,
}

/// A single point shared by the target boundary and the splitter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// The contact point.
    pub point: Point<Real>,
    /// The curve parameter of the contact on the target curve.
    ///
    /// The integer part is the index of a segment of the curve and the fractional part the
    /// position along that segment. Parameters on closed curves are in `[0, n)` where `n` is
    /// its number of segments.
    pub target_param: Real,
    /// The curve parameter of the contact on the splitter.
    pub splitter_param: Real,
}

/// A connected set of contacts between one target curve and the splitter.
///
/// A transversal crossing or a touch at a vertex yields a single contact. A splitter running
/// along a boundary edge yields the contacts at both ends of the shared portion.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionPoint {
    /// Whether the splitter crosses the boundary here.
    pub kind: IntersectionKind,
    /// The index of the target curve.
    ///
    /// Curves are numbered in order: the exterior ring then the holes of each polygon
    /// component, or each line string component.
    pub curve: usize,
    /// The smallest and largest target parameters spanned by this intersection, in the curve
    /// direction. For rings the range may wrap around the start vertex, in which case
    /// `target_range[0] > target_range[1]`.
    pub target_range: [Real; 2],
    /// The contacts, sorted along the splitter.
    pub contacts: Vec<Contact>,
    /// Does the splitter run along the target boundary here?
    pub overlap: bool,
}

impl IntersectionPoint {
    /// The first contact along the splitter.
    pub fn entry(&self) -> &Contact {
        &self.contacts[0]
    }

    /// The last contact along the splitter.
    pub fn exit(&self) -> &Contact {
        &self.contacts[self.contacts.len() - 1]
    }

    /// The contact at the start of this intersection along the target curve.
    pub fn target_start(&self) -> &Contact {
        let start = self.target_range[0];
        self.contacts
            .iter()
            .find(|c| c.target_param == start)
            .unwrap_or(self.entry())
    }

    /// Is this a crossing intersection?
    #[inline]
    pub fn is_crossing(&self) -> bool {
        self.kind == IntersectionKind::Crossing
    }

    /// The number of points this intersection counts for: two for an overlap, one otherwise.
    #[inline]
    pub fn multiplicity(&self) -> usize {
        if self.overlap {
            2
        } else {
            1
        }
    }
}

/// A polyline seen as a parametric curve.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Curve<'a> {
    pub points: &'a [Point<Real>],
    pub closed: bool,
}

impl<'a> Curve<'a> {
    pub fn line(line: &'a LineString) -> Self {
        Self {
            points: line.points(),
            closed: line.is_closed(),
        }
    }

    pub fn ring(ring: &'a Ring) -> Self {
        Self {
            points: ring.points(),
            closed: true,
        }
    }

    /// The same curve, seen as an open path even if it is closed.
    pub fn as_open(self) -> Self {
        Self {
            closed: false,
            ..self
        }
    }

    #[inline]
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[inline]
    pub fn segment(&self, i: usize) -> Segment {
        Segment::new(self.points[i], self.points[i + 1])
    }

    /// Maps the end parameter of a closed curve to its start.
    fn normalize(&self, param: Real) -> Real {
        if self.closed && param >= self.num_segments() as Real {
            param - self.num_segments() as Real
        } else {
            param
        }
    }

    fn direction(&self, i: usize, epsilon: Real) -> Option<Vector<Real>> {
        let dir = self.segment(i).scaled_direction();
        let len = dir.norm();
        (len > epsilon).then(|| dir / len)
    }

    /// The unit direction followed when leaving the point at `param` forward.
    pub fn ray_after(&self, param: Real, epsilon: Real) -> Option<Vector<Real>> {
        let n = self.num_segments();
        if param.fract() != 0.0 {
            return self.direction(param.floor() as usize, 0.0);
        }

        let mut i = param as usize;
        for _ in 0..n {
            if i >= n {
                if !self.closed {
                    return None;
                }
                i = 0;
            }

            if let Some(dir) = self.direction(i, epsilon) {
                return Some(dir);
            }
            i += 1;
        }

        None
    }

    /// The unit direction followed when leaving the point at `param` backward.
    pub fn ray_before(&self, param: Real, epsilon: Real) -> Option<Vector<Real>> {
        let n = self.num_segments();
        if param.fract() != 0.0 {
            return self.direction(param.floor() as usize, 0.0).map(|d| -d);
        }

        let mut i = (param as usize).min(n);
        for _ in 0..n {
            if i == 0 {
                if !self.closed {
                    return None;
                }
                i = n;
            }

            i -= 1;
            if let Some(dir) = self.direction(i, epsilon) {
                return Some(-dir);
            }
        }

        None
    }

    /// The unit tangent at `param`, averaging both adjacent directions at interior vertices.
    pub fn tangent(&self, param: Real, epsilon: Real) -> Option<Vector<Real>> {
        match (self.ray_before(param, epsilon), self.ray_after(param, epsilon)) {
            (Some(before), Some(after)) => {
                let sum = after - before;
                let norm = sum.norm();
                if norm > epsilon {
                    Some(sum / norm)
                } else {
                    Some(after)
                }
            }
            (Some(before), None) => Some(-before),
            (None, after) => after,
        }
    }

    /// The cumulated length of the curve at each vertex.
    pub fn arc_lengths(&self) -> Vec<Real> {
        let mut result = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        result.push(total);
        for i in 0..self.num_segments() {
            total += self.segment(i).length();
            result.push(total);
        }
        result
    }

    /// The arc-length position of `param`, given the result of [`Self::arc_lengths`].
    pub fn arc_length_at(&self, arcs: &[Real], param: Real) -> Real {
        let i = param.floor() as usize;
        if i >= self.num_segments() {
            return arcs[arcs.len() - 1];
        }
        arcs[i] + (param - i as Real) * (arcs[i + 1] - arcs[i])
    }
}

/// The boundary curves of a polygonal or linear target, in the order used to number
/// [`IntersectionPoint::curve`].
pub(crate) fn target_curves(target: &Geometry) -> Vec<Curve<'_>> {
    match target {
        Geometry::Polygon(p) => p.rings().map(Curve::ring).collect(),
        Geometry::MultiPolygon(mp) => mp
            .iter()
            .flat_map(|p| p.rings().map(Curve::ring))
            .collect(),
        Geometry::LineString(l) => alloc::vec![Curve::line(l)],
        Geometry::MultiLineString(ml) => ml.iter().map(Curve::line).collect(),
        _ => Vec::new(),
    }
}

#[derive(Copy, Clone, Debug)]
struct RawContact {
    contact: Contact,
    arc: Real,
    partner: Option<usize>,
}

fn make_contact(
    target: &Curve,
    i: usize,
    loc1: SegmentPointLocation,
    splitter: &Curve,
    j: usize,
    loc2: SegmentPointLocation,
    tolerances: &SplitTolerances,
) -> Contact {
    let tseg = target.segment(i);
    let point = if loc1.is_vertex() {
        tseg.point_at(&loc1)
    } else if loc2.is_vertex() {
        splitter.segment(j).point_at(&loc2)
    } else {
        tolerances.precision.make_precise(tseg.point_at(&loc1))
    };

    Contact {
        point,
        target_param: target.normalize(i as Real + loc1.parameter()),
        splitter_param: splitter.normalize(j as Real + loc2.parameter()),
    }
}

fn raw_contacts(
    target: &Curve,
    splitter: &Curve,
    splitter_arcs: &[Real],
    tolerances: &SplitTolerances,
) -> Vec<RawContact> {
    let eps = tolerances.epsilon;
    let target_aabb = Aabb::from_points(target.points.iter().copied()).loosened(eps);
    let mut result = Vec::new();
    let push = |contact: Contact, partner: Option<usize>, result: &mut Vec<RawContact>| {
        result.push(RawContact {
            contact,
            arc: splitter.arc_length_at(splitter_arcs, contact.splitter_param),
            partner,
        })
    };

    // TODO: this is a naive O(n²) check. Could use an acceleration structure for large curves.
    for j in 0..splitter.num_segments() {
        let sseg = splitter.segment(j);
        if !sseg.local_aabb().intersects(&target_aabb) {
            continue;
        }

        for i in 0..target.num_segments() {
            let tseg = target.segment(i);
            let Some(inter) = utils::segments_intersection2d(&tseg.a, &tseg.b, &sseg.a, &sseg.b, eps)
            else {
                continue;
            };

            match inter {
                SegmentsIntersection::Point { loc1, loc2 } => {
                    let contact = make_contact(target, i, loc1, splitter, j, loc2, tolerances);
                    push(contact, None, &mut result);
                }
                SegmentsIntersection::Segment {
                    first_loc1,
                    first_loc2,
                    second_loc1,
                    second_loc2,
                } => {
                    let k = result.len();
                    let first =
                        make_contact(target, i, first_loc1, splitter, j, first_loc2, tolerances);
                    let second =
                        make_contact(target, i, second_loc1, splitter, j, second_loc2, tolerances);
                    push(first, Some(k + 1), &mut result);
                    push(second, Some(k), &mut result);
                }
            }
        }
    }

    result
}

/// Groups contacts that are connected along the splitter, returning clusters of indices sorted
/// along the splitter.
fn cluster_contacts(
    raw: &[RawContact],
    splitter: &Curve,
    splitter_length: Real,
    epsilon: Real,
) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by_key(|&k| {
        (
            OrderedFloat(raw[k].arc),
            OrderedFloat(raw[k].contact.target_param),
        )
    });

    let mut cluster_of = alloc::vec![usize::MAX; raw.len()];
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut reach = -Real::MAX;

    for k in order {
        let contact = &raw[k];
        if clusters.is_empty() || contact.arc > reach + 2.0 * epsilon {
            clusters.push(Vec::new());
            reach = contact.arc;
        }

        cluster_of[k] = clusters.len() - 1;
        if let Some(cluster) = clusters.last_mut() {
            cluster.push(k);
        }
        reach = reach.max(contact.arc);
        if let Some(partner) = contact.partner {
            reach = reach.max(raw[partner].arc);
        }
    }

    // A cluster may straddle the start point of a closed splitter.
    if splitter.closed && clusters.len() > 1 {
        let first_min = raw[clusters[0][0]].arc;
        let last = &clusters[clusters.len() - 1];
        let last_max = raw[last[last.len() - 1]].arc;
        let linked = last
            .iter()
            .any(|&k| raw[k].partner.is_some_and(|p| cluster_of[p] == 0));

        if linked || first_min + (splitter_length - last_max) <= 2.0 * epsilon {
            if let Some(mut last) = clusters.pop() {
                last.append(&mut clusters[0]);
                clusters[0] = last;
            }
        }
    }

    clusters
}

/// The range of target parameters covered by a cluster.
///
/// On rings this is the complement of the largest gap between the parameters, which may wrap
/// around the start vertex.
fn target_range(target: &Curve, mut params: Vec<Real>) -> [Real; 2] {
    params.sort_by_key(|s| OrderedFloat(*s));
    let first = params[0];
    let last = params[params.len() - 1];

    if !target.closed || params.len() == 1 {
        return [first, last];
    }

    let n = target.num_segments() as Real;
    let mut largest_gap = first + n - last;
    let mut range = [first, last];

    for w in params.windows(2) {
        let gap = w[1] - w[0];
        if gap > largest_gap {
            largest_gap = gap;
            range = [w[1], w[0]];
        }
    }

    range
}

/// The side of the target a ray leaving the target point with rays `[before, after]` lies on.
///
/// Returns `Some(true)` for the left of the target direction, `Some(false)` for its right and
/// `None` if the ray is aligned with one of the target rays.
fn side_of_target(target_rays: [Vector<Real>; 2], dir: &Vector<Real>) -> Option<bool> {
    let [before, after] = target_rays;
    let wedge = utils::ccw_angle(&after, &before);
    let angle = utils::ccw_angle(&after, dir);

    if angle <= ANGULAR_EPSILON
        || angle >= TAU - ANGULAR_EPSILON
        || (angle - wedge).abs() <= ANGULAR_EPSILON
    {
        None
    } else {
        Some(angle < wedge)
    }
}

/// Decides if the splitter passes from one side of the target to the other.
///
/// The side the splitter comes from is measured where it enters the intersection and the side
/// it leaves to where it exits it, so that a portion running along the boundary is classified
/// by its two ends. A missing ray (at an endpoint of an open curve) means touching.
fn classify(
    entry_rays: [Option<Vector<Real>>; 2],
    splitter_before: Option<Vector<Real>>,
    exit_rays: [Option<Vector<Real>>; 2],
    splitter_after: Option<Vector<Real>>,
) -> IntersectionKind {
    let ([Some(b0), Some(a0)], Some(s_before), [Some(b1), Some(a1)], Some(s_after)) =
        (entry_rays, splitter_before, exit_rays, splitter_after)
    else {
        return IntersectionKind::Touching;
    };

    match (
        side_of_target([b0, a0], &s_before),
        side_of_target([b1, a1], &s_after),
    ) {
        (Some(from), Some(to)) if from != to => IntersectionKind::Crossing,
        _ => IntersectionKind::Touching,
    }
}

pub(crate) fn curve_intersections(
    target: &Curve,
    curve: usize,
    splitter: &Curve,
    tolerances: &SplitTolerances,
) -> Vec<IntersectionPoint> {
    let eps = tolerances.epsilon;
    let arcs = splitter.arc_lengths();
    let raw = raw_contacts(target, splitter, &arcs, tolerances);

    if raw.is_empty() {
        return Vec::new();
    }

    let splitter_length = arcs[arcs.len() - 1];
    cluster_contacts(&raw, splitter, splitter_length, eps)
        .into_iter()
        .map(|cluster| {
            let contacts: Vec<Contact> = cluster.iter().map(|&k| raw[k].contact).collect();
            let overlap = cluster.iter().any(|&k| raw[k].partner.is_some());
            let range = target_range(target, contacts.iter().map(|c| c.target_param).collect());
            let entry = contacts[0];
            let exit = contacts[contacts.len() - 1];
            let target_rays = |s: Real| [target.ray_before(s, eps), target.ray_after(s, eps)];
            let kind = classify(
                target_rays(entry.target_param),
                splitter.ray_before(entry.splitter_param, eps),
                target_rays(exit.target_param),
                splitter.ray_after(exit.splitter_param, eps),
            );

            IntersectionPoint {
                kind,
                curve,
                target_range: range,
                contacts,
                overlap,
            }
        })
        .collect()
}

/// Computes all the points where `splitter` meets the boundary of `target`.
///
/// Polygons contribute their rings, lines contribute themselves. Each intersection is
/// classified as crossing or touching. The result is sorted by target curve, then along the
/// splitter. Unsupported geometry types have no boundary and yield no intersection.
pub fn find_intersections(
    target: &Geometry,
    splitter: &LineString,
    tolerances: &SplitTolerances,
) -> Vec<IntersectionPoint> {
    let splitter = Curve::line(splitter);
    target_curves(target)
        .iter()
        .enumerate()
        .flat_map(|(i, curve)| curve_intersections(curve, i, &splitter, tolerances))
        .collect()
}

/// The points where the splitter intersects itself, away from its shared consecutive vertices.
///
/// Each contact carries the parameter of the first segment as `target_param` and the parameter
/// of the second one as `splitter_param`.
pub(crate) fn splitter_self_intersections(
    splitter: &Curve,
    tolerances: &SplitTolerances,
) -> Vec<Contact> {
    let eps = tolerances.epsilon;
    let m = splitter.num_segments();
    let mut result = Vec::new();

    for j in 0..m {
        let seg1 = splitter.segment(j);
        for k in j + 2..m {
            if splitter.closed && j == 0 && k == m - 1 {
                continue;
            }

            let seg2 = splitter.segment(k);
            let Some(inter) = utils::segments_intersection2d(&seg1.a, &seg1.b, &seg2.a, &seg2.b, eps)
            else {
                continue;
            };

            match inter {
                SegmentsIntersection::Point { loc1, loc2 } => {
                    result.push(make_contact(splitter, j, loc1, splitter, k, loc2, tolerances));
                }
                SegmentsIntersection::Segment {
                    first_loc1,
                    first_loc2,
                    second_loc1,
                    second_loc2,
                } => {
                    result.push(make_contact(
                        splitter, j, first_loc1, splitter, k, first_loc2, tolerances,
                    ));
                    result.push(make_contact(
                        splitter,
                        j,
                        second_loc1,
                        splitter,
                        k,
                        second_loc2,
                        tolerances,
                    ));
                }
            }
        }
    }

    result
}

/// Decomposes `splitter` into arcs that do not intersect themselves, cutting it at each of its
/// self-intersection points.
pub fn decompose_splitter(splitter: &LineString, tolerances: &SplitTolerances) -> Vec<LineString> {
    let curve = Curve::line(splitter).as_open();
    let mut cuts: Vec<(Real, Point<Real>)> = splitter_self_intersections(&curve, tolerances)
        .into_iter()
        .flat_map(|c| [(c.target_param, c.point), (c.splitter_param, c.point)])
        .collect();

    super::split_line::cut_at_params(&curve, &mut cuts, tolerances.epsilon)
        .into_iter()
        .map(LineString::new)
        .collect()
}
