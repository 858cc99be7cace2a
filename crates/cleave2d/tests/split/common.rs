use cleave2d::io::parse_wkt;
use cleave2d::math::{Point, Real};
use cleave2d::shape::{Geometry, LineString, Polygon, Ring};

pub fn geom(wkt: &str) -> Geometry {
    parse_wkt(wkt).unwrap()
}

pub fn line(wkt: &str) -> LineString {
    geom(wkt).as_line_string().unwrap().clone()
}

pub fn polygon(geometry: &Geometry) -> &Polygon {
    geometry
        .as_polygon()
        .unwrap_or_else(|| panic!("not a polygon: {:?}", geometry))
}

/// Are both rings the same closed cycle of points, regardless of start vertex and winding?
pub fn same_ring(a: &Ring, b: &Ring, eps: Real) -> bool {
    let a = &a.points()[..a.len().saturating_sub(1)];
    let b = &b.points()[..b.len().saturating_sub(1)];
    if a.len() != b.len() {
        return false;
    }

    let n = a.len();
    let close = |p: &Point<Real>, q: &Point<Real>| na::distance(p, q) <= eps;
    (0..n).any(|shift| {
        (0..n).all(|i| close(&a[i], &b[(i + shift) % n]))
            || (0..n).all(|i| close(&a[i], &b[(shift + n - i) % n]))
    })
}

pub fn assert_same_polygon(actual: &Geometry, expected_wkt: &str) {
    let expected = geom(expected_wkt);
    let (actual, expected) = (polygon(actual), polygon(&expected));
    assert!(
        same_ring(actual.exterior(), expected.exterior(), 1.0e-9),
        "exterior {:?} != {:?}",
        actual.exterior(),
        expected.exterior()
    );
    assert_eq!(actual.interiors().len(), expected.interiors().len());
    for hole in expected.interiors() {
        assert!(actual
            .interiors()
            .iter()
            .any(|h| same_ring(h, hole, 1.0e-9)));
    }
}

pub fn assert_points_eq(actual: &[Point<Real>], expected: &[Point<Real>]) {
    assert_eq!(actual.len(), expected.len(), "{:?} != {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(a, e, epsilon = 1.0e-9);
    }
}
