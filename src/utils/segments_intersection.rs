use crate::math::{Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// Intersection between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentsIntersection {
    /// Single point of intersection.
    Point {
        /// Location of the intersection point on the first segment.
        loc1: SegmentPointLocation,
        /// Location of the intersection point on the second segment.
        loc2: SegmentPointLocation,
    },
    /// Intersection along a segment (when both segments are collinear).
    Segment {
        /// Location of the first intersection point on the first segment.
        first_loc1: SegmentPointLocation,
        /// Location of the first intersection point on the second segment.
        first_loc2: SegmentPointLocation,
        /// Location of the second intersection point on the first segment.
        second_loc1: SegmentPointLocation,
        /// Location of the second intersection point on the second segment.
        second_loc2: SegmentPointLocation,
    },
}

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
///
/// Points closer than `epsilon` are considered coincident: an endpoint lying within `epsilon`
/// of the other segment yields an intersection on that endpoint even if the exact segments
/// do not meet, and two segments whose endpoints all lie within `epsilon` of the other
/// segment's supporting line are treated as collinear.
///
/// The first locations of a [`SegmentsIntersection::Segment`] are always the ones closest
/// to `a`.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let seg1 = Segment::new(*a, *b);
    let seg2 = Segment::new(*c, *d);

    if !seg1
        .local_aabb()
        .loosened(epsilon)
        .intersects(&seg2.local_aabb())
    {
        return None;
    }

    let len1 = seg1.length();
    let len2 = seg2.length();

    if len1 <= epsilon || len2 <= epsilon {
        return degenerate_intersection(&seg1, &seg2, epsilon);
    }

    let collinear = (seg1.distance_to_line(c) <= epsilon && seg1.distance_to_line(d) <= epsilon)
        || (seg2.distance_to_line(a) <= epsilon && seg2.distance_to_line(b) <= epsilon);

    if collinear {
        return collinear_intersection(&seg1, &seg2, epsilon);
    }

    // Shared endpoints first, so that vertex/vertex contacts are reported exactly.
    for (i, p1) in [a, b].into_iter().enumerate() {
        for (j, p2) in [c, d].into_iter().enumerate() {
            if na::distance(p1, p2) <= epsilon {
                return Some(SegmentsIntersection::Point {
                    loc1: SegmentPointLocation::OnVertex(i as u32),
                    loc2: SegmentPointLocation::OnVertex(j as u32),
                });
            }
        }
    }

    // Then endpoints snapped on the other segment's interior.
    for (i, p1) in [a, b].into_iter().enumerate() {
        if seg2.distance_to_point(p1) <= epsilon {
            return Some(SegmentsIntersection::Point {
                loc1: SegmentPointLocation::OnVertex(i as u32),
                loc2: seg2.locate_point(p1, epsilon),
            });
        }
    }

    for (j, p2) in [c, d].into_iter().enumerate() {
        if seg1.distance_to_point(p2) <= epsilon {
            return Some(SegmentsIntersection::Point {
                loc1: seg1.locate_point(p2, epsilon),
                loc2: SegmentPointLocation::OnVertex(j as u32),
            });
        }
    }

    let r = seg1.scaled_direction();
    let q = seg2.scaled_direction();
    let denom = r.perp(&q);

    if denom == 0.0 {
        return None;
    }

    let ac = c - a;
    let s = ac.perp(&q) / denom;
    let t = ac.perp(&r) / denom;

    if 0.0 > s || s > 1.0 || 0.0 > t || t > 1.0 {
        None
    } else {
        Some(SegmentsIntersection::Point {
            loc1: SegmentPointLocation::OnEdge([1.0 - s, s]),
            loc2: SegmentPointLocation::OnEdge([1.0 - t, t]),
        })
    }
}

fn degenerate_intersection(
    seg1: &Segment,
    seg2: &Segment,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    if seg1.length() <= epsilon {
        if seg2.distance_to_point(&seg1.a) <= epsilon {
            return Some(SegmentsIntersection::Point {
                loc1: SegmentPointLocation::OnVertex(0),
                loc2: seg2.locate_point(&seg1.a, epsilon),
            });
        }
    } else if seg1.distance_to_point(&seg2.a) <= epsilon {
        return Some(SegmentsIntersection::Point {
            loc1: seg1.locate_point(&seg2.a, epsilon),
            loc2: SegmentPointLocation::OnVertex(0),
        });
    }

    None
}

fn collinear_intersection(
    seg1: &Segment,
    seg2: &Segment,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let dir = seg1.scaled_direction();
    let len1 = seg1.length();
    let sq_len1 = len1 * len1;
    let tc = (seg2.a - seg1.a).dot(&dir) / sq_len1;
    let td = (seg2.b - seg1.a).dot(&dir) / sq_len1;
    let lo = tc.min(td).max(0.0);
    let hi = tc.max(td).min(1.0);
    let param_eps = epsilon / len1;

    if hi < lo - param_eps {
        return None;
    }

    let first = seg1.a + dir * lo;
    let second = seg1.a + dir * hi;
    let first_loc1 = snap_parameter(lo, len1, epsilon);
    let second_loc1 = snap_parameter(hi, len1, epsilon);

    if (hi - lo) * len1 <= epsilon {
        // The segments only meet at their ends.
        let mid = na::center(&first, &second);
        let loc1 = if first_loc1.is_vertex() {
            first_loc1
        } else {
            second_loc1
        };
        let pt = if loc1.is_vertex() { seg1.point_at(&loc1) } else { mid };
        return Some(SegmentsIntersection::Point {
            loc1,
            loc2: seg2.locate_point(&pt, epsilon),
        });
    }

    Some(SegmentsIntersection::Segment {
        first_loc1,
        first_loc2: seg2.locate_point(&first, epsilon),
        second_loc1,
        second_loc2: seg2.locate_point(&second, epsilon),
    })
}

fn snap_parameter(t: Real, len: Real, epsilon: Real) -> SegmentPointLocation {
    if t * len <= epsilon {
        SegmentPointLocation::OnVertex(0)
    } else if (1.0 - t) * len <= epsilon {
        SegmentPointLocation::OnVertex(1)
    } else {
        SegmentPointLocation::OnEdge([1.0 - t, t])
    }
}
